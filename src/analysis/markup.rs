//! Lenient markup scanning primitives.
//!
//! This is deliberately not an HTML parser: regex passes pull out the handful
//! of constructs the extractor scores (title, headings, images, anchors, meta
//! description, visible text). Unclosed tags, stray brackets and other
//! malformed input degrade to "signal absent" — scanning never fails.

use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("static pattern"));

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h([1-6])[^>]*>(.*?)</h[1-6]\s*>").expect("static pattern"));

static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("static pattern"));

static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>").expect("static pattern"));

static META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("static pattern"));

static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("static pattern")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("static pattern"));

/// One extracted image tag.
#[derive(Debug, Clone)]
pub(crate) struct Image {
    /// Trimmed alt text, if the attribute is present.
    pub alt: Option<String>,
}

impl Image {
    /// Alt text present and non-empty.
    pub fn has_alt(&self) -> bool {
        self.alt.as_deref().is_some_and(|a| !a.is_empty())
    }
}

/// Structural view over one document, produced by [`scan`].
#[derive(Debug, Clone, Default)]
pub(crate) struct Markup {
    pub title: Option<String>,
    /// Heading texts indexed by level (index 0 = h1). Levels 4–6 are scanned
    /// but only contribute to visible text.
    pub headings: [Vec<String>; 3],
    pub images: Vec<Image>,
    /// Raw href values, in document order.
    pub hrefs: Vec<String>,
    pub meta_description: Option<String>,
    /// Markup-free body text (scripts and styles removed).
    pub visible_text: String,
}

/// Scans a document into its scoreable parts. Never fails.
pub(crate) fn scan(document: &str) -> Markup {
    let mut markup = Markup {
        title: TITLE_RE
            .captures(document)
            .map(|c| inner_text(&c[1]))
            .filter(|t| !t.is_empty()),
        ..Markup::default()
    };

    for caps in HEADING_RE.captures_iter(document) {
        // Capture 1 is a single digit by construction.
        let level: usize = caps[1].parse().unwrap_or(0);
        if (1..=3).contains(&level) {
            markup.headings[level - 1].push(inner_text(&caps[2]));
        }
    }

    for m in IMG_RE.find_iter(document) {
        markup.images.push(Image {
            alt: attribute(m.as_str(), "alt"),
        });
    }

    for m in ANCHOR_RE.find_iter(document) {
        if let Some(href) = attribute(m.as_str(), "href") {
            markup.hrefs.push(href);
        }
    }

    markup.meta_description = META_RE
        .find_iter(document)
        .filter_map(|m| {
            let tag = m.as_str();
            let name = attribute(tag, "name")?;
            if name.eq_ignore_ascii_case("description") {
                attribute(tag, "content")
            } else {
                None
            }
        })
        .find(|content| !content.is_empty());

    markup.visible_text = visible_text(document);
    markup
}

/// Strips nested markup and collapses whitespace inside an element body.
pub(crate) fn inner_text(fragment: &str) -> String {
    let stripped = TAG_RE.replace_all(fragment, " ");
    collapse_whitespace(&decode_entities(&stripped))
}

/// Body text with scripts, styles, the title element and all tags removed.
fn visible_text(document: &str) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(document, " ");
    let without_title = TITLE_RE.replace_all(&without_blocks, " ");
    let stripped = TAG_RE.replace_all(&without_title, " ");
    collapse_whitespace(&decode_entities(&stripped))
}

/// Pulls a quoted attribute value out of a single tag. ASCII-case-insensitive
/// on the attribute name, tolerant of either quote style. Works on byte
/// offsets of the original string so multibyte content cannot skew indices.
fn attribute(tag: &str, name: &str) -> Option<String> {
    let bytes = tag.as_bytes();
    let needle = format!("{}=", name);
    let needle = needle.as_bytes();

    let mut at = 0;
    while at + needle.len() <= bytes.len() {
        if !bytes[at..at + needle.len()].eq_ignore_ascii_case(needle) {
            at += 1;
            continue;
        }
        // Must be a standalone attribute name, not a suffix (e.g. `data-alt=`).
        let boundary_ok =
            at == 0 || (!bytes[at - 1].is_ascii_alphanumeric() && bytes[at - 1] != b'-');
        let value_start = at + needle.len();
        if !boundary_ok {
            at = value_start;
            continue;
        }

        // The matched needle is pure ASCII, so value_start is a char boundary.
        let rest = &tag[value_start..];
        let mut chars = rest.chars();
        return match chars.next() {
            Some(q @ ('"' | '\'')) => {
                let body: String = chars.take_while(|&c| c != q).collect();
                Some(decode_entities(body.trim()))
            }
            // Unquoted value: runs to the next whitespace or tag end.
            Some(_) => {
                let body: String = rest
                    .chars()
                    .take_while(|c| !c.is_whitespace() && *c != '>')
                    .collect();
                Some(decode_entities(body.trim()))
            }
            None => None,
        };
    }

    None
}

/// Decodes the handful of entities that matter for text metrics.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// How an anchor's href participates in link counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkKind {
    /// Relative paths, fragments, `javascript:` pseudo-links, and absolute
    /// URLs on the configured internal domain.
    Internal,
    /// Absolute http/https URLs on foreign hosts.
    External,
    /// `mailto:`, `tel:` and empty hrefs — counted by neither side.
    Excluded,
}

/// Classifies one href. `internal_domain` is a bare host like `example.com`;
/// exact matches and dot-separated subdomains of it count as internal.
pub(crate) fn classify_link(href: &str, internal_domain: Option<&str>) -> LinkKind {
    let href = href.trim();
    if href.is_empty() {
        return LinkKind::Excluded;
    }

    let lower = href.to_lowercase();
    if lower.starts_with("mailto:") || lower.starts_with("tel:") {
        return LinkKind::Excluded;
    }
    if lower.starts_with("javascript:") || lower.starts_with('#') {
        return LinkKind::Internal;
    }

    let host = if let Some(rest) = lower.strip_prefix("http://") {
        Some(host_of(rest))
    } else if let Some(rest) = lower.strip_prefix("https://") {
        Some(host_of(rest))
    } else if let Some(rest) = lower.strip_prefix("//") {
        Some(host_of(rest))
    } else {
        None
    };

    match host {
        Some(host) => match internal_domain {
            Some(domain) => {
                let domain = domain.to_lowercase();
                if host == domain || host.ends_with(&format!(".{}", domain)) {
                    LinkKind::Internal
                } else {
                    LinkKind::External
                }
            }
            None => LinkKind::External,
        },
        // No scheme: a relative path.
        None => LinkKind::Internal,
    }
}

fn host_of(after_scheme: &str) -> String {
    after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("")
        .split('@')
        .next_back()
        .unwrap_or("")
        .split(':')
        .next()
        .unwrap_or("")
        .to_string()
}
