//! Document + keywords → [`SignalSet`].

use tracing::debug;

use crate::config::Config;
use crate::constants::{KEYWORD_DENSITY_MAX, KEYWORD_DENSITY_MIN};

use super::markup::{self, LinkKind};
use super::signals::SignalSet;

/// Extracts the fixed signal set from one document.
///
/// Stateless and cheap to clone; construct once per engine from a validated
/// [`Config`] and share freely. `analyze` is a single pass over the document
/// and never fails — malformed markup degrades to absent signals.
#[derive(Debug, Clone)]
pub struct ContentAnalyzer {
    min_word_count: usize,
    internal_domain: Option<String>,
}

impl ContentAnalyzer {
    /// Creates an analyzer from engine configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            min_word_count: config.min_word_count,
            internal_domain: config.internal_domain.clone(),
        }
    }

    /// Returns the configured adequate-word-count floor.
    pub fn min_word_count(&self) -> usize {
        self.min_word_count
    }

    /// Analyzes `document` against `keywords`, producing the complete signal set.
    ///
    /// An empty document is legal and yields the [`SignalSet::default`]
    /// baseline. An empty keyword list makes every keyword-dependent boolean
    /// false and the density 0.
    pub fn analyze(&self, document: &str, keywords: &[String]) -> SignalSet {
        let mut signals = SignalSet::default();

        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        let markup = markup::scan(document);

        if let Some(ref title) = markup.title {
            signals.title_length = title.chars().count();
            signals.title_contains_keyword = contains_any(title, &keywords);
        }

        let [h1, h2, h3] = &markup.headings;
        signals.h1_count = h1.len();
        signals.h1_present = !h1.is_empty();
        signals.h1_contains_keyword = h1.iter().any(|h| contains_any(h, &keywords));
        signals.h2_count = h2.len();
        signals.h2_contains_keyword = h2.iter().any(|h| contains_any(h, &keywords));
        signals.h3_count = h3.len();
        signals.h3_contains_keyword = h3.iter().any(|h| contains_any(h, &keywords));

        signals.image_count = markup.images.len();
        signals.images_with_alt = markup.images.iter().filter(|i| i.has_alt()).count();
        signals.images_have_alt = signals.images_with_alt == signals.image_count;

        for href in &markup.hrefs {
            match markup::classify_link(href, self.internal_domain.as_deref()) {
                LinkKind::Internal => signals.internal_link_count += 1,
                LinkKind::External => signals.external_link_count += 1,
                LinkKind::Excluded => {}
            }
        }
        signals.has_internal_links = signals.internal_link_count > 0;
        signals.has_external_links = signals.external_link_count > 0;

        if let Some(ref description) = markup.meta_description {
            signals.meta_description = true;
            signals.meta_description_length = description.chars().count();
        }

        let tokens = tokenize(&markup.visible_text);
        signals.word_count = tokens.len();
        signals.word_count_adequate = signals.word_count >= self.min_word_count;

        signals.keyword_occurrences = tokens
            .iter()
            .filter(|token| keywords.iter().any(|k| token.contains(k.as_str())))
            .count();
        signals.keyword_density = density_percent(signals.keyword_occurrences, signals.word_count);
        signals.keyword_density_ok = (KEYWORD_DENSITY_MIN..=KEYWORD_DENSITY_MAX)
            .contains(&signals.keyword_density);

        debug!(
            word_count = signals.word_count,
            keyword_density = signals.keyword_density,
            images = signals.image_count,
            internal_links = signals.internal_link_count,
            external_links = signals.external_link_count,
            "document analyzed"
        );

        signals
    }
}

/// Case-insensitive substring match of any keyword against `text`.
/// `keywords` are already lowercased.
fn contains_any(text: &str, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return false;
    }
    let text = text.to_lowercase();
    keywords.iter().any(|k| text.contains(k.as_str()))
}

/// Whitespace tokens, punctuation-trimmed and case-folded. Tokens that are
/// pure punctuation vanish.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Occurrence percentage rounded to two decimals; 0 for an empty body.
fn density_percent(occurrences: usize, total_tokens: usize) -> f64 {
    if total_tokens == 0 {
        return 0.0;
    }
    let raw = occurrences as f64 / total_tokens as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
