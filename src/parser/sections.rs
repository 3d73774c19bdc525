//! Splitting a report into numbered top-level sections.

use std::sync::LazyLock;

use regex::Regex;

/// A header line: optional indentation, `##`, a number and a period, then the
/// heading text to end of line.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^[ \t]*##[ \t]*([0-9]+)\.[ \t]+(\S.*)$").expect("header pattern is valid")
});

/// A section as located in the source text, before its content is parsed.
///
/// All fields borrow from the document that was segmented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSection<'a> {
    /// The header number as written.
    pub number: &'a str,
    /// The header text after the number, trimmed.
    pub heading: &'a str,
    /// Everything between the end of the header line and the next header.
    pub content: &'a str,
}

impl RawSection<'_> {
    /// The display title, `"<number>. <heading>"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}. {}", self.number, self.heading)
    }
}

/// Splits a document into sections at each numbered header line.
///
/// Sections are returned in document order. Numbers are neither validated nor
/// deduplicated. Text before the first header belongs to no section. A
/// document with no headers yields no sections.
#[must_use]
pub fn segment_sections(text: &str) -> Vec<RawSection<'_>> {
    let mut headers = HEADER.captures_iter(text).peekable();
    let mut sections = Vec::new();

    while let Some(captures) = headers.next() {
        let (Some(header), Some(number), Some(heading)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };

        // A section ends where the next header line starts.
        let end = headers
            .peek()
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());

        sections.push(RawSection {
            number: number.as_str(),
            heading: heading.as_str().trim(),
            content: &text[header.end()..end],
        });
    }

    sections
}
