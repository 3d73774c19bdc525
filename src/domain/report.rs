use serde::{Deserialize, Serialize};

use crate::domain::AssessmentBadge;

/// A top-level numbered block of a report.
///
/// Sections are produced in document order. The `number` is taken from the
/// header as written; it is not guaranteed to be sequential or unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// The number from the header, e.g. `"2"` for `## 2. Root Cause`.
    pub number: String,

    /// The display title, `"<number>. <heading text>"`.
    ///
    /// This is the key used to look up a section's [`DisplayConfig`].
    ///
    /// [`DisplayConfig`]: crate::domain::DisplayConfig
    pub title: String,

    /// The trimmed text between this header and the next.
    ///
    /// Renderers fall back to showing this verbatim when
    /// [`subsections`](Self::subsections) is empty.
    pub raw_content: String,

    /// Labeled subsections that yielded at least one item, in document order.
    pub subsections: Vec<Subsection>,

    /// The section's status annotation, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AssessmentBadge>,
}

impl Section {
    /// Whether the section has no structured content and should be rendered
    /// from [`raw_content`](Self::raw_content).
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.subsections.is_empty()
    }
}

/// A labeled block within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    /// The label text, without emphasis markers or trailing colon.
    pub title: String,

    /// Trimmed, non-empty items with bullet markers removed.
    pub items: Vec<String>,
}
