//! Group-scoped parser state.
//!
//! RTF groups (`{ ... }`) scope two attributes that matter for text
//! extraction: the Unicode fallback width set by `\ucN` and whether the group
//! is ignorable. Entering a group saves both; leaving it restores them.

use smallvec::SmallVec;

/// Attributes saved when a group opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeFrame {
    /// Fallback characters to skip after each `\u`
    pub unicode_skip_width: usize,
    /// Whether text in this group is suppressed
    pub is_ignorable: bool,
}

impl Default for ScopeFrame {
    fn default() -> Self {
        Self {
            unicode_skip_width: 1,
            is_ignorable: false,
        }
    }
}

/// Mutable context for a single conversion.
#[derive(Debug, Default)]
pub struct ParserState {
    /// Saved attributes of the enclosing groups
    scope_stack: SmallVec<[ScopeFrame; 16]>,
    /// Attributes of the current group
    current: ScopeFrame,
    /// Fallback literals still to be discarded after a `\u`
    pending_ascii_skip_count: usize,
    /// High surrogate from a `\u` waiting for its low half
    pending_high_surrogate: Option<u32>,
    /// Extracted text
    output: String,
}

impl ParserState {
    /// Create a state with an output buffer sized for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Enter a group: the new group inherits the current attributes.
    #[inline]
    pub fn push_scope(&mut self) {
        self.scope_stack.push(self.current);
        self.pending_ascii_skip_count = 0;
    }

    /// Leave a group, restoring the enclosing attributes.
    ///
    /// Returns `false` when there is no group to leave; the current
    /// attributes are then left unchanged.
    #[inline]
    pub fn pop_scope(&mut self) -> bool {
        self.pending_ascii_skip_count = 0;
        match self.scope_stack.pop() {
            Some(frame) => {
                self.current = frame;
                true
            },
            None => false,
        }
    }

    /// Number of currently open groups.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    #[inline]
    pub fn is_ignorable(&self) -> bool {
        self.current.is_ignorable
    }

    /// Suppress output for the rest of the current group.
    #[inline]
    pub fn mark_ignorable(&mut self) {
        self.current.is_ignorable = true;
    }

    #[cfg(test)]
    pub fn unicode_skip_width(&self) -> usize {
        self.current.unicode_skip_width
    }

    #[inline]
    pub fn set_unicode_skip_width(&mut self, width: usize) {
        self.current.unicode_skip_width = width;
    }

    /// Attributes in effect for the current group.
    #[cfg(test)]
    pub fn current_frame(&self) -> ScopeFrame {
        self.current
    }

    /// Arm fallback skipping after a `\u` escape.
    #[inline]
    pub fn start_fallback(&mut self) {
        self.pending_ascii_skip_count = self.current.unicode_skip_width;
    }

    #[inline]
    pub fn clear_fallback(&mut self) {
        self.pending_ascii_skip_count = 0;
    }

    /// Consume one fallback character if any are pending.
    ///
    /// Returns `true` when the caller must discard the character.
    #[inline]
    pub fn take_fallback(&mut self) -> bool {
        if self.pending_ascii_skip_count > 0 {
            self.pending_ascii_skip_count -= 1;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub fn pending_fallback(&self) -> usize {
        self.pending_ascii_skip_count
    }

    /// Remember a high surrogate until its low half arrives.
    #[inline]
    pub fn hold_high_surrogate(&mut self, unit: u32) {
        self.pending_high_surrogate = Some(unit);
    }

    /// Take back the held high surrogate, if any.
    #[inline]
    pub fn take_high_surrogate(&mut self) -> Option<u32> {
        self.pending_high_surrogate.take()
    }

    /// Emit a lone held surrogate as U+FFFD.
    #[inline]
    pub fn flush_high_surrogate(&mut self) {
        if self.pending_high_surrogate.take().is_some() {
            self.output.push(char::REPLACEMENT_CHARACTER);
        }
    }

    #[inline]
    pub fn push_char(&mut self, ch: char) {
        self.output.push(ch);
    }

    #[inline]
    pub fn push_str(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Finish the conversion and hand out the accumulated text.
    pub fn into_output(mut self) -> String {
        self.flush_high_surrogate();
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ParserState::default();
        assert_eq!(state.unicode_skip_width(), 1);
        assert!(!state.is_ignorable());
        assert_eq!(state.pending_fallback(), 0);
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_group_inherits_and_restores() {
        let mut state = ParserState::default();
        state.set_unicode_skip_width(2);

        state.push_scope();
        assert_eq!(state.unicode_skip_width(), 2);
        state.mark_ignorable();
        state.set_unicode_skip_width(0);

        assert!(state.pop_scope());
        assert_eq!(state.unicode_skip_width(), 2);
        assert!(!state.is_ignorable());
    }

    #[test]
    fn test_unbalanced_pop_keeps_state() {
        let mut state = ParserState::default();
        state.mark_ignorable();
        state.set_unicode_skip_width(3);

        assert!(!state.pop_scope());
        assert_eq!(
            state.current_frame(),
            ScopeFrame {
                unicode_skip_width: 3,
                is_ignorable: true
            }
        );
    }

    #[test]
    fn test_braces_reset_fallback() {
        let mut state = ParserState::default();
        state.start_fallback();
        state.push_scope();
        assert_eq!(state.pending_fallback(), 0);

        state.start_fallback();
        state.pop_scope();
        assert_eq!(state.pending_fallback(), 0);

        state.start_fallback();
        state.pop_scope();
        assert_eq!(state.pending_fallback(), 0);
    }

    #[test]
    fn test_take_fallback_counts_down() {
        let mut state = ParserState::default();
        state.set_unicode_skip_width(2);
        state.start_fallback();
        assert!(state.take_fallback());
        assert!(state.take_fallback());
        assert!(!state.take_fallback());
    }

    #[test]
    fn test_lone_surrogate_becomes_replacement() {
        let mut state = ParserState::default();
        state.push_str("a");
        state.hold_high_surrogate(0xD83D);
        assert_eq!(state.into_output(), "a\u{FFFD}");
    }
}
