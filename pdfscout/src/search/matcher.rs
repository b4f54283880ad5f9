use regex::{Regex, RegexBuilder};

use crate::errors::{SearchError, SearchResult};

/// How multiple terms combine into a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Any single term is enough
    #[default]
    Any,
    /// Every term must appear somewhere in the document
    All,
}

/// Case-insensitive literal matcher for one or more search terms
#[derive(Debug, Clone)]
pub struct TermMatcher {
    terms: Vec<Regex>,
    mode: MatchMode,
}

impl TermMatcher {
    /// Creates a matcher for the given terms.
    ///
    /// Terms are matched literally; regex metacharacters in a term have no
    /// special meaning.
    pub fn new(terms: &[String], mode: MatchMode) -> SearchResult<Self> {
        let terms = terms
            .iter()
            .map(|term| {
                RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| SearchError::invalid_pattern(e.to_string()))
            })
            .collect::<SearchResult<Vec<_>>>()?;

        Ok(Self { terms, mode })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Starts a page-by-page scan of one document
    pub fn scan(&self) -> PageScan<'_> {
        PageScan {
            matcher: self,
            seen: vec![false; self.terms.len()],
        }
    }

    /// Returns true if `text` alone satisfies the matcher
    pub fn is_match(&self, text: &str) -> bool {
        let mut scan = self.scan();
        scan.feed(text)
    }
}

/// Tracks which terms have been seen while pages are fed in order
#[derive(Debug)]
pub struct PageScan<'a> {
    matcher: &'a TermMatcher,
    seen: Vec<bool>,
}

impl PageScan<'_> {
    /// Feeds the next page's text; returns true once the match condition holds
    pub fn feed(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return self.is_satisfied();
        }

        for (seen, regex) in self.seen.iter_mut().zip(&self.matcher.terms) {
            if !*seen && regex.is_match(text) {
                *seen = true;
            }
        }
        self.is_satisfied()
    }

    fn is_satisfied(&self) -> bool {
        match self.matcher.mode {
            MatchMode::Any => self.seen.iter().any(|&s| s),
            MatchMode::All => !self.seen.is_empty() && self.seen.iter().all(|&s| s),
        }
    }
}
