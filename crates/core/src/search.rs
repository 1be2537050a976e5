//! Search helpers shared by the venue and artist search endpoints.
//!
//! Search is a case-insensitive substring match over a row's name, city and
//! state. Both the term and the candidate fields are folded with
//! [`str::to_lowercase`], so non-ASCII letters match across case too.

/// A search term, case-folded once and matched against many rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// True if any field contains the term. The empty term matches all.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.0.is_empty()
            || fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.0))
    }
}
