//! Failing-signal identifiers and their remediation text.

use serde::{Deserialize, Serialize};

/// One diagnosable SEO defect, keyed by a stable string id.
///
/// The ids are a wire contract: they appear in `article.generate.request`
/// events and in the correction API responses, and downstream regeneration
/// prompts key off them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    MissingKeywordInTitle,
    MissingH1,
    MissingKeywordInH1,
    MissingKeywordInH2,
    KeywordDensityIssue,
    MissingAltTags,
    LowWordCount,
    NoInternalLinks,
    NoExternalLinks,
    MissingMetaDescription,
}

impl Issue {
    /// Stable string id used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            Issue::MissingKeywordInTitle => "missing_keyword_in_title",
            Issue::MissingH1 => "missing_h1",
            Issue::MissingKeywordInH1 => "missing_keyword_in_h1",
            Issue::MissingKeywordInH2 => "missing_keyword_in_h2",
            Issue::KeywordDensityIssue => "keyword_density_issue",
            Issue::MissingAltTags => "missing_alt_tags",
            Issue::LowWordCount => "low_word_count",
            Issue::NoInternalLinks => "no_internal_links",
            Issue::NoExternalLinks => "no_external_links",
            Issue::MissingMetaDescription => "missing_meta_description",
        }
    }

    /// Fixed remediation sentence for this issue.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Issue::MissingKeywordInTitle => {
                "Include the primary target keyword in the page title."
            }
            Issue::MissingH1 => "Add a single H1 heading that states the page topic.",
            Issue::MissingKeywordInH1 => "Work the primary keyword into the H1 heading.",
            Issue::MissingKeywordInH2 => {
                "Use the target keyword in at least one H2 section heading."
            }
            Issue::KeywordDensityIssue => {
                "Adjust keyword usage so density falls between 0.5% and 3% of body text."
            }
            Issue::MissingAltTags => "Add descriptive alt text to every image.",
            Issue::LowWordCount => {
                "Expand the article body to meet the recommended minimum word count."
            }
            Issue::NoInternalLinks => "Link to at least one related page on the same site.",
            Issue::NoExternalLinks => "Cite at least one authoritative external source.",
            Issue::MissingMetaDescription => {
                "Add a meta description summarizing the page in one or two sentences."
            }
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Issue {
    type Err = UnknownIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "missing_keyword_in_title" => Ok(Issue::MissingKeywordInTitle),
            "missing_h1" => Ok(Issue::MissingH1),
            "missing_keyword_in_h1" => Ok(Issue::MissingKeywordInH1),
            "missing_keyword_in_h2" => Ok(Issue::MissingKeywordInH2),
            "keyword_density_issue" => Ok(Issue::KeywordDensityIssue),
            "missing_alt_tags" => Ok(Issue::MissingAltTags),
            "low_word_count" => Ok(Issue::LowWordCount),
            "no_internal_links" => Ok(Issue::NoInternalLinks),
            "no_external_links" => Ok(Issue::NoExternalLinks),
            "missing_meta_description" => Ok(Issue::MissingMetaDescription),
            _ => Err(UnknownIssue(s.to_string())),
        }
    }
}

/// Returned when an issue id does not name a canonical issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIssue(pub String);

impl std::fmt::Display for UnknownIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown issue id: {}", self.0)
    }
}

impl std::error::Error for UnknownIssue {}

/// Remediation text for an issue id arriving as a raw string (e.g. from the
/// correction API). Unknown ids get a generic fallback instead of an error.
pub fn suggestion_for(id: &str) -> String {
    match id.parse::<Issue>() {
        Ok(issue) => issue.suggestion().to_string(),
        Err(_) => format!("Fix: {}", id),
    }
}
