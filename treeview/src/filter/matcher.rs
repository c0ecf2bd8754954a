//! Case-insensitive substring matching using nucleo-matcher.

use std::fmt;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Matches node labels that contain the filter text, ignoring case.
///
/// An empty filter text matches nothing; callers treat it as "no filter".
pub struct TextMatcher {
    query: String,
    atom: Option<Atom>,
    matcher: Matcher,
    buf: Vec<char>,
}

impl TextMatcher {
    pub fn new(query: &str) -> Self {
        let atom = (!query.is_empty()).then(|| {
            Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Never,
                AtomKind::Substring,
                false,
            )
        });
        Self {
            query: query.to_string(),
            atom,
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    /// Check if there is no filter text.
    pub fn is_empty(&self) -> bool {
        self.atom.is_none()
    }

    /// Check if `text` contains the filter text.
    pub fn matches(&mut self, text: &str) -> bool {
        let Some(atom) = &self.atom else {
            return false;
        };
        // One char per haystack slot; `Utf32Str::new` folds graphemes.
        let haystack = if text.is_ascii() {
            Utf32Str::Ascii(text.as_bytes())
        } else {
            self.buf.clear();
            self.buf.extend(text.chars());
            Utf32Str::Unicode(&self.buf)
        };
        atom.score(haystack, &mut self.matcher).is_some()
    }
}

impl fmt::Debug for TextMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextMatcher")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}
