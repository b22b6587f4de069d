//! Static lookup tables for the RTF converter.
//!
//! Both tables are compile-time perfect-hash structures: they are built by
//! `phf` at compile time and shared read-only across threads.

use phf::{phf_map, phf_set};

/// Control words that open a destination whose content is never visible text
/// (font and color tables, pictures, embedded objects, document properties,
/// Office Math, mail-merge data and similar).
///
/// Lookups are case-sensitive: Office Math destinations use mixed case.
static DESTINATIONS: phf::Set<&'static str> = phf_set! {
    "aftncn", "aftnsep", "aftnsepc", "annotation", "atnauthor", "atndate", "atnicn", "atnid",
    "atnparent", "atnref", "atntime", "atrfend", "atrfstart", "author", "background",
    "bkmkend", "bkmkstart", "blipuid", "buptim", "category", "colorschememapping", "colortbl",
    "comment", "company", "creatim", "datafield", "datastore", "defchp", "defpap", "do",
    "doccomm", "docvar", "dptxbxtext", "ebcend", "ebcstart", "factoidname", "falt", "fchars",
    "ffdeftext", "ffentrymcr", "ffexitmcr", "ffformat", "ffhelptext", "ffl", "ffname",
    "ffstattext", "field", "file", "filetbl", "fldinst", "fldrslt", "fldtype", "fname",
    "fontemb", "fontfile", "fonttbl", "footer", "footerf", "footerl", "footerr", "footnote",
    "formfield", "ftncn", "ftnsep", "ftnsepc", "g", "generator", "gridtbl", "header",
    "headerf", "headerl", "headerr", "hl", "hlfr", "hlinkbase", "hlloc", "hlsrc", "hsv",
    "htmltag", "info", "keycode", "keywords", "latentstyles", "lchars", "levelnumbers",
    "leveltext", "lfolevel", "linkval", "list", "listlevel", "listname", "listoverride",
    "listoverridetable", "listpicture", "liststylename", "listtable", "listtext",
    "lsdlockedexcept", "macc", "maccPr", "mailmerge", "maln", "malnScr", "manager", "margPr",
    "mbar", "mbarPr", "mbaseJc", "mbegChr", "mborderBox", "mborderBoxPr", "mbox", "mboxPr",
    "mchr", "mcount", "mctrlPr", "md", "mdeg", "mdegHide", "mden", "mdiff", "mdPr", "me",
    "mendChr", "meqArr", "meqArrPr", "mf", "mfName", "mfPr", "mfunc", "mfuncPr", "mgroupChr",
    "mgroupChrPr", "mgrow", "mhideBot", "mhideLeft", "mhideRight", "mhideTop", "mhtmltag",
    "mlim", "mlimloc", "mlimlow", "mlimlowPr", "mlimupp", "mlimuppPr", "mm", "mmaddfieldname",
    "mmath", "mmathPict", "mmathPr", "mmaxdist", "mmc", "mmcJc", "mmconnectstr",
    "mmconnectstrdata", "mmcPr", "mmcs", "mmdatasource", "mmheadersource", "mmmailsubject",
    "mmodso", "mmodsofilter", "mmodsofldmpdata", "mmodsomappedname", "mmodsoname",
    "mmodsorecipdata", "mmodsosort", "mmodsosrc", "mmodsotable", "mmodsoudl", "mmodsoudldata",
    "mmodsouniquetag", "mmPr", "mmquery", "mmr", "mnary", "mnaryPr", "mnoBreak", "mnum",
    "mobjDist", "moMath", "moMathPara", "moMathParaPr", "mopEmu", "mphant", "mphantPr",
    "mplcHide", "mpos", "mr", "mrad", "mradPr", "mrPr", "msepChr", "mshow", "mshp", "msPre",
    "msPrePr", "msSub", "msSubPr", "msSubSup", "msSubSupPr", "msSup", "msSupPr", "mstrikeBLTR",
    "mstrikeH", "mstrikeTLBR", "mstrikeV", "msub", "msubHide", "msup", "msupHide", "mtransp",
    "mtype", "mvertJc", "mvfmf", "mvfml", "mvtof", "mvtol", "mzeroAsc", "mzeroDesc",
    "mzeroWid", "nesttableprops", "nextfile", "nonesttables", "objalias", "objclass",
    "objdata", "object", "objname", "objsect", "objtime", "oldcprops", "oldpprops",
    "oldsprops", "oldtprops", "oleclsid", "operator", "panose", "password", "passwordhash",
    "pgp", "pgptbl", "picprop", "pict", "pn", "pnseclvl", "pntext", "pntxta", "pntxtb",
    "printim", "private", "propname", "protend", "protstart", "protusertbl", "pxe", "result",
    "revtbl", "revtim", "rsidtbl", "rxe", "shp", "shpgrp", "shpinst", "shppict", "shprslt",
    "shptxt", "sn", "sp", "staticval", "stylesheet", "subject", "sv", "svb", "tc", "template",
    "themedata", "title", "txe", "ud", "upr", "userprops", "wgrffmtfilter", "windowcaption",
    "writereservation", "writereservhash", "xe", "xform", "xmlattrname", "xmlattrvalue",
    "xmlclose", "xmlname", "xmlnstbl", "xmlopen",
};

/// Control words that stand for a literal character or break.
static SPECIAL_CHARS: phf::Map<&'static str, &'static str> = phf_map! {
    "par" => "\n",
    "sect" => "\n\n",
    "page" => "\n\n",
    "line" => "\n",
    "tab" => "\t",
    "emdash" => "\u{2014}",
    "endash" => "\u{2013}",
    "emspace" => "\u{2003}",
    "enspace" => "\u{2002}",
    "qmspace" => "\u{2005}",
    "bullet" => "\u{2022}",
    "lquote" => "\u{2018}",
    "rquote" => "\u{2019}",
    "ldblquote" => "\u{201C}",
    "rdblquote" => "\u{201D}",
};

/// Whether `name` introduces a non-printable destination group.
///
/// # Examples
///
/// ```
/// use contexto::rtf::is_destination;
///
/// assert!(is_destination("fonttbl"));
/// assert!(is_destination("maccPr"));
/// assert!(!is_destination("par"));
/// ```
#[inline]
pub fn is_destination(name: &str) -> bool {
    DESTINATIONS.contains(name)
}

/// Replacement text for control words that stand for a character.
#[inline]
pub fn special_char(name: &str) -> Option<&'static str> {
    SPECIAL_CHARS.get(name).copied()
}
