//! The fixed-shape extraction result and per-signal value view.

use serde::{Deserialize, Serialize};

/// Complete set of SEO observations for one document.
///
/// Every [`crate::analysis::ContentAnalyzer::analyze`] call produces the full
/// field set; a document that is empty or malformed yields the baseline from
/// [`SignalSet::default`] rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    /// Any target keyword appears in the `<title>` text (case-insensitive).
    pub title_contains_keyword: bool,
    /// Character length of the `<title>` text.
    pub title_length: usize,

    /// At least one `<h1>` exists.
    pub h1_present: bool,
    pub h1_count: usize,
    /// Any target keyword appears in any `<h1>` text.
    pub h1_contains_keyword: bool,
    pub h2_count: usize,
    pub h2_contains_keyword: bool,
    pub h3_count: usize,
    pub h3_contains_keyword: bool,

    /// Body tokens matched by at least one keyword.
    pub keyword_occurrences: usize,
    /// `keyword_occurrences / word_count × 100`, rounded to 2 decimals.
    pub keyword_density: f64,
    /// Density within the healthy band (see [`crate::constants`]).
    pub keyword_density_ok: bool,

    pub image_count: usize,
    pub images_with_alt: usize,
    /// `true` iff no image is missing alt text (vacuously true for zero images).
    pub images_have_alt: bool,

    pub internal_link_count: usize,
    pub external_link_count: usize,
    pub has_internal_links: bool,
    pub has_external_links: bool,

    /// A non-empty meta description is present.
    pub meta_description: bool,
    pub meta_description_length: usize,

    /// Visible-body word count (scripts, styles and markup excluded).
    pub word_count: usize,
    pub word_count_adequate: bool,
}

impl Default for SignalSet {
    /// The empty-document baseline: everything zero/false except
    /// `images_have_alt` — zero images means nothing is missing alt text.
    fn default() -> Self {
        Self {
            title_contains_keyword: false,
            title_length: 0,
            h1_present: false,
            h1_count: 0,
            h1_contains_keyword: false,
            h2_count: 0,
            h2_contains_keyword: false,
            h3_count: 0,
            h3_contains_keyword: false,
            keyword_occurrences: 0,
            keyword_density: 0.0,
            keyword_density_ok: false,
            image_count: 0,
            images_with_alt: 0,
            images_have_alt: true,
            internal_link_count: 0,
            external_link_count: 0,
            has_internal_links: false,
            has_external_links: false,
            meta_description: false,
            meta_description_length: 0,
            word_count: 0,
            word_count_adequate: false,
        }
    }
}

impl SignalSet {
    /// Looks up a signal by its stable name as a tagged [`SignalValue`].
    ///
    /// Returns `None` for unknown names; the scorer treats those as failing.
    /// `keyword_density` itself is not addressable here — the gated view of
    /// density is `keyword_density_ok`.
    pub fn value(&self, name: &str) -> Option<SignalValue> {
        let value = match name {
            "title_contains_keyword" => SignalValue::Boolean(self.title_contains_keyword),
            "title_length" => SignalValue::Count(self.title_length as u64),
            "h1_present" => SignalValue::Boolean(self.h1_present),
            "h1_count" => SignalValue::Count(self.h1_count as u64),
            "h1_contains_keyword" => SignalValue::Boolean(self.h1_contains_keyword),
            "h2_count" => SignalValue::Count(self.h2_count as u64),
            "h2_contains_keyword" => SignalValue::Boolean(self.h2_contains_keyword),
            "h3_count" => SignalValue::Count(self.h3_count as u64),
            "h3_contains_keyword" => SignalValue::Boolean(self.h3_contains_keyword),
            "keyword_occurrences" => SignalValue::Count(self.keyword_occurrences as u64),
            "keyword_density_ok" => SignalValue::Boolean(self.keyword_density_ok),
            "image_count" => SignalValue::Count(self.image_count as u64),
            "images_with_alt" => SignalValue::Count(self.images_with_alt as u64),
            "images_have_alt" => SignalValue::Boolean(self.images_have_alt),
            "internal_link_count" => SignalValue::Count(self.internal_link_count as u64),
            "external_link_count" => SignalValue::Count(self.external_link_count as u64),
            "has_internal_links" => SignalValue::Boolean(self.has_internal_links),
            "has_external_links" => SignalValue::Boolean(self.has_external_links),
            "meta_description" => SignalValue::Boolean(self.meta_description),
            "meta_description_length" => SignalValue::Count(self.meta_description_length as u64),
            "word_count" => SignalValue::Count(self.word_count as u64),
            "word_count_adequate" => SignalValue::Boolean(self.word_count_adequate),
            _ => return None,
        };
        Some(value)
    }
}

/// Tagged per-signal value.
///
/// Scoring never inspects raw numbers: a boolean passes when `true`, a count
/// passes when positive, and that rule lives here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
    Boolean(bool),
    Count(u64),
}

impl SignalValue {
    /// Returns `true` if this signal counts toward the score.
    #[inline]
    pub fn is_passing(&self) -> bool {
        match self {
            SignalValue::Boolean(b) => *b,
            SignalValue::Count(n) => *n > 0,
        }
    }
}

impl std::fmt::Display for SignalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalValue::Boolean(b) => write!(f, "{}", b),
            SignalValue::Count(n) => write!(f, "{}", n),
        }
    }
}
