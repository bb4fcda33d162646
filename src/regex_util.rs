use regex::{Captures, Regex};

/// Anchored-match helpers over [`Regex`].
///
/// `Regex::find` and `Regex::captures` report substring matches; the shape
/// checks in this crate only ever care about the whole input.
pub trait RegexFullMatch {
    /// True when the pattern matches the whole of `s`, not just a substring.
    fn full_match(&self, s: &str) -> bool;

    /// Like `Regex::captures`, but only when the whole of `s` matched.
    fn full_captures<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        if let Some(matched) = self.find(s) {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }

    fn full_captures<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let full_capture = captures.get(0)?;
        if full_capture.start() != 0 || full_capture.end() != s.len() {
            return None;
        }

        Some(captures)
    }
}
