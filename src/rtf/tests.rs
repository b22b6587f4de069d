use super::*;
use proptest::prelude::*;

fn convert(input: &str) -> String {
    convert_rtf_to_text(input).unwrap()
}

#[test]
fn test_paragraph_break_after_header() {
    assert_eq!(convert(r"{\rtf1\ansi Hello\par World}"), "Hello\nWorld");
}

#[test]
fn test_ignorable_extension_group() {
    assert_eq!(convert(r"{\*\generator Foo;}Visible"), "Visible");
}

#[test]
fn test_hex_escape() {
    assert_eq!(convert(r"\'e9cole"), "\u{e9}cole");
}

#[test]
fn test_unicode_escape_skips_fallback() {
    assert_eq!(convert(r"\uc1\u233?cole"), "\u{e9}cole");
}

#[test]
fn test_nested_destination_is_suppressed() {
    assert_eq!(convert(r"{\fonttbl{\f0 Arial;}}Hello"), "Hello");
}

#[test]
fn test_uc_without_argument_fails() {
    assert_eq!(
        convert_rtf_to_text(r"\uc"),
        Err(RtfError::InvalidControlArgument {
            word: "uc".to_string(),
            position: 0,
        })
    );
}

#[test]
fn test_u_without_argument_fails() {
    let err = convert_rtf_to_text(r"ab\u x").unwrap_err();
    assert_eq!(
        err,
        RtfError::InvalidControlArgument {
            word: "u".to_string(),
            position: 2,
        }
    );
}

#[test]
fn test_out_of_range_code_point_fails() {
    assert!(matches!(
        convert_rtf_to_text(r"\u1114112?"),
        Err(RtfError::InvalidControlArgument { .. })
    ));
    assert!(matches!(
        convert_rtf_to_text(r"\u-70000?"),
        Err(RtfError::InvalidControlArgument { .. })
    ));
}

#[test]
fn test_invalid_arguments_in_ignorable_groups_are_ignored() {
    assert_eq!(convert(r"{\*\foo \uc \u}x"), "x");
}

#[test]
fn test_negative_unicode_argument() {
    // 0xF0B7 written as a signed 16-bit value
    assert_eq!(convert(r"\u-3913?"), "\u{F0B7}");
    assert_eq!(convert(r"\u-4064 x"), "\u{F020}");
}

#[test]
fn test_wider_fallback() {
    assert_eq!(convert(r"{\uc2\u8212--}x"), "\u{2014}x");
    assert_eq!(convert(r"\uc0\u8212-"), "\u{2014}-");
    // A negative width disables skipping
    assert_eq!(convert(r"\uc-1\u8212-"), "\u{2014}-");
}

#[test]
fn test_hex_escape_as_fallback() {
    assert_eq!(convert(r"\u233\'e9cole"), "\u{e9}cole");
    assert_eq!(convert(r"\u8212\'97x"), "\u{2014}x");
}

#[test]
fn test_control_words_cancel_pending_fallback() {
    assert_eq!(convert(r"\u233\par?"), "\u{e9}\n?");
    assert_eq!(convert(r"\u233\b ?"), "\u{e9}?");
}

#[test]
fn test_control_symbols_cancel_pending_fallback() {
    assert_eq!(convert(r"\u233\~?"), "\u{e9}\u{A0}?");
    assert_eq!(convert(r"\u233\{?"), "\u{e9}{?");
    assert_eq!(convert(r"\u233\-?"), "\u{e9}?");
}

#[test]
fn test_backslash_newline_produces_nothing() {
    assert_eq!(convert("one\\\ntwo"), "onetwo");
    // The escaped line break is a control symbol, so the fallback is not skipped
    assert_eq!(convert("\\u233\\\r\n?x"), "\u{e9}?x");
}

#[test]
fn test_line_breaks_do_not_cancel_fallback() {
    assert_eq!(convert("\\u233\r\n?x"), "\u{e9}x");
}

#[test]
fn test_uc_is_group_scoped() {
    assert_eq!(convert(r"{\uc0\u233}\u233?x"), "\u{e9}\u{e9}x");
    assert_eq!(convert(r"\uc2{\uc0\u233ab}\u233abc"), "\u{e9}ab\u{e9}c");
}

#[test]
fn test_surrogate_pair() {
    assert_eq!(convert(r"\u-10179?\u-8704?"), "\u{1F600}");
    assert_eq!(convert(r"\uc0\u55357\u56832 ok"), "\u{1F600}ok");
}

#[test]
fn test_lone_surrogates() {
    assert_eq!(convert(r"\u-8704?x"), "\u{FFFD}x");
    assert_eq!(convert(r"\u-10179?ab"), "\u{FFFD}ab");
    assert_eq!(convert(r"\u-10179?"), "\u{FFFD}");
    assert_eq!(convert(r"{\u-10179?}z"), "\u{FFFD}z");
}

#[test]
fn test_escaped_symbols() {
    assert_eq!(convert(r"a\{b\}c\\d\~e"), "a{b}c\\d\u{A0}e");
    assert_eq!(convert(r"{\*\x \{\~\\}z"), "z");
    // Other control symbols produce nothing
    assert_eq!(convert(r"soft\-hyphen\_x\|"), "softhyphenx");
}

#[test]
fn test_special_characters() {
    assert_eq!(
        convert(r"\tab\emdash\endash\bullet\lquote\rquote\ldblquote\rdblquote"),
        "\t\u{2014}\u{2013}\u{2022}\u{2018}\u{2019}\u{201C}\u{201D}"
    );
    assert_eq!(convert(r"a\line b\sect c\page d"), "a\nb\n\nc\n\nd");
    assert_eq!(convert(r"\emspace\enspace\qmspace"), "\u{2003}\u{2002}\u{2005}");
}

#[test]
fn test_unknown_control_words_are_dropped() {
    assert_eq!(convert(r"\b bold\b0  \i x"), "bold x");
    assert_eq!(convert(r"\PAR x"), "x");
}

#[test]
fn test_raw_line_breaks_are_swallowed() {
    assert_eq!(convert("Hello\r\nWorld\n"), "HelloWorld");
}

#[test]
fn test_high_hex_bytes_are_latin1() {
    assert_eq!(convert(r"\'93quoted\'94"), "\u{93}quoted\u{94}");
    assert_eq!(convert(r"\'FF"), "\u{FF}");
}

#[test]
fn test_unbalanced_braces_are_tolerated() {
    assert_eq!(convert(r"a}b{\*c}d}"), "abd");
    // No frame to restore: the group stays ignorable
    assert_eq!(convert(r"\*x}y"), "");
    assert_eq!(convert(r"{{{open"), "open");
}

#[test]
fn test_document_properties_are_suppressed() {
    assert_eq!(
        convert(r"{\info{\title Doc}{\author Me}{\creatim\yr2024}}Body"),
        "Body"
    );
}

#[test]
fn test_field_groups_are_suppressed() {
    assert_eq!(
        convert(r#"{\field{\*\fldinst HYPERLINK "http://x"}{\fldrslt link}}after"#),
        "after"
    );
}

#[test]
fn test_picture_data_is_suppressed() {
    assert_eq!(
        convert(r"before{\pict\pngblip\picw10\pich10 89504e470d0a1a0a}after"),
        "beforeafter"
    );
}

#[test]
fn test_wordpad_document() {
    let rtf = concat!(
        r"{\rtf1\ansi\ansicpg1252\deff0\nouicompat{\fonttbl{\f0\fnil\fcharset0 Calibri;}}",
        "\r\n",
        r"{\colortbl ;\red255\green0\blue0;}",
        "\r\n",
        r"{\*\generator Riched20 10.0.19041}\viewkind4\uc1 ",
        "\r\n",
        r"\pard\sa200\sl276\slmult1\f0\fs22\lang10 Hola \cf1 mundo\cf0 , caf\'e9.\par",
        "\r\n",
        r"Segunda l\u237?nea\par",
        "\r\n}\r\n",
    );
    assert_eq!(convert(rtf), "Hola mundo, caf\u{e9}.\nSegunda l\u{ed}nea\n");
}

#[test]
fn test_empty_input() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("{}"), "");
}

const DESTINATION_SAMPLE: &[&str] = &[
    "fonttbl",
    "colortbl",
    "stylesheet",
    "info",
    "pict",
    "object",
    "header",
    "footnote",
    "themedata",
    "mmathPr",
    "xmlnstbl",
];

fn plain_text() -> impl Strategy<Value = String> {
    "[^\\\\{}\r\n]{0,40}"
}

fn word_text() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ,.;:!?]{0,30}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_plain_text_is_unchanged(text in plain_text()) {
        prop_assert_eq!(convert(&text), text.clone());
        prop_assert_eq!(convert(&convert(&text)), text);
    }

    #[test]
    fn prop_destination_content_is_suppressed(
        name in prop::sample::select(DESTINATION_SAMPLE),
        body in word_text(),
        nested in word_text(),
        tail in word_text(),
    ) {
        let input = format!("{{\\{name} {body}{{\\b {nested}}}}}{tail}");
        prop_assert_eq!(convert(&input), tail);
    }

    #[test]
    fn prop_group_state_is_restored(
        before in word_text(),
        inner in word_text(),
        after in word_text(),
        width in 0usize..4,
    ) {
        let input = format!("{before}{{\\uc{width}\\*{inner}}}\\u233?{after}");
        prop_assert_eq!(convert(&input), format!("{before}\u{e9}{after}"));
    }

    #[test]
    fn prop_breaks_are_depth_independent(depth in 0usize..32) {
        let input = format!("{}\\par\\tab {}", "{".repeat(depth), "}".repeat(depth));
        prop_assert_eq!(convert(&input), "\n\t");
    }
}
