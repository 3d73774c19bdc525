//! Finding a section's assessment annotation.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::AssessmentBadge;

/// `**Assessment:**` followed by the status, optionally in square brackets.
static ASSESSMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*Assessment:\*\*[ \t]*\[?([^\[\]\n]+)").expect("assessment pattern is valid")
});

/// Finds the assessment annotation in a section body and classifies it.
///
/// Only the first annotation in the body is considered. Returns `None` when
/// there is no annotation or its status is blank.
#[must_use]
pub fn extract_assessment(content: &str) -> Option<AssessmentBadge> {
    let status = ASSESSMENT.captures(content)?.get(1)?.as_str().trim();
    if status.is_empty() {
        tracing::trace!("ignoring assessment with blank status");
        return None;
    }
    Some(AssessmentBadge::new(status))
}
