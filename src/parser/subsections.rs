//! Splitting a section body into labeled subsections.

use std::sync::LazyLock;

use regex::Regex;

/// A bold label ending in a colon: `**What Happened:**`.
static LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+):\*\*").expect("label pattern is valid"));

/// The one label that annotates a section rather than opening a subsection.
const ASSESSMENT_LABEL: &str = "Assessment";

/// A labeled block as located in a section body, before its items are
/// extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSubsection<'a> {
    /// The label text, trimmed.
    pub title: &'a str,
    /// Everything between the end of the label and the next label, including
    /// any text on the label's own line.
    pub body: &'a str,
}

/// Splits a section body into subsections at each label.
///
/// Text before the first label is not part of any subsection. Text after a
/// label on the same line belongs to that label's body. `**Assessment:**`
/// labels, in any case, never open a subsection; they stay in the body of the
/// subsection they appear in.
#[must_use]
pub fn segment_subsections(content: &str) -> Vec<RawSubsection<'_>> {
    let labels: Vec<_> = LABEL
        .captures_iter(content)
        .filter_map(|captures| {
            let label = captures.get(0)?;
            let title = captures.get(1)?.as_str().trim();
            (!title.eq_ignore_ascii_case(ASSESSMENT_LABEL)).then_some((label.range(), title))
        })
        .collect();

    labels
        .iter()
        .enumerate()
        .map(|(index, (range, title))| {
            let end = labels
                .get(index + 1)
                .map_or(content.len(), |(next, _)| next.start);
            RawSubsection {
                title: *title,
                body: &content[range.end..end],
            }
        })
        .collect()
}
