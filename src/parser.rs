//! Parsing of semi-structured analysis reports.
//!
//! A report is plain text using a light markup convention:
//!
//! ```text
//! ## 1. Shot Performance
//! **What Happened:**
//! - Fast flow
//! - Good crema
//! **Assessment:** [Good]
//! ```
//!
//! Numbered `##` headers delimit sections, bold labels ending in a colon
//! delimit subsections, and each remaining line of a subsection is an item.
//! Text on the label's own line counts as its first item. An optional
//! `**Assessment:**` annotation gives the section a badge and never opens a
//! subsection.
//!
//! Parsing never fails. Input that does not follow the convention degrades to
//! fewer structures: no headers gives no sections, and a section with no
//! usable subsections keeps its text in [`Section::raw_content`].

use tracing::instrument;

use crate::domain::{Section, Subsection};

mod assessment;
mod items;
mod sections;
mod subsections;

pub use assessment::extract_assessment;
pub use items::extract_items;
pub use sections::{RawSection, segment_sections};
pub use subsections::{RawSubsection, segment_subsections};

/// Parses a report into its ordered sections.
///
/// Returns an empty vector when the document has no numbered section headers.
/// Callers should then present the document as unstructured text.
///
/// Each section is parsed independently: subsections that yield no items are
/// dropped, and the first assessment annotation in the section becomes its
/// badge.
#[must_use]
#[instrument(level = "debug", skip_all, fields(len = document.len()))]
pub fn parse_structured_analysis(document: &str) -> Vec<Section> {
    let sections: Vec<Section> = segment_sections(document)
        .into_iter()
        .map(parse_section)
        .collect();

    if sections.is_empty() {
        tracing::debug!("No section headers found, treating report as unstructured");
    } else {
        tracing::debug!("Parsed {} sections", sections.len());
    }

    sections
}

fn parse_section(raw: RawSection<'_>) -> Section {
    let subsections: Vec<Subsection> = segment_subsections(raw.content)
        .into_iter()
        .filter_map(|subsection| {
            let items = extract_items(subsection.body);
            if items.is_empty() {
                tracing::trace!(
                    "Dropping empty subsection '{}' in section {}",
                    subsection.title,
                    raw.number
                );
                return None;
            }
            Some(Subsection {
                title: subsection.title.to_string(),
                items,
            })
        })
        .collect();

    if subsections.is_empty() {
        tracing::trace!("Section {} has no subsections, keeping raw content", raw.number);
    }

    Section {
        number: raw.number.to_string(),
        title: raw.title(),
        raw_content: raw.content.trim().to_string(),
        subsections,
        assessment: extract_assessment(raw.content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssessmentBadge, Tier};

    const FULL_REPORT: &str = "\
Here is the analysis of your shot.

## 1. Shot Performance
**What Happened:**
- Fast flow
- Good crema
**Assessment:** [Good]

## 2. Root Cause Analysis
**Primary Factors:**
- Grind too coarse
- Dose slightly low

**Secondary Factors:**

**Assessment:** [Needs Improvement]

## 3. Recommended Adjustments
Grind two steps finer and retry.
";

    #[test]
    fn shot_performance_section() {
        let input = "## 1. Shot Performance\n**What Happened:**\n- Fast flow\n- Good crema\n**Assessment:** [Good]\n";

        let sections = parse_structured_analysis(input);

        assert_eq!(sections.len(), 1);
        let section = &sections[0];
        assert_eq!(section.number, "1");
        assert_eq!(section.title, "1. Shot Performance");
        assert_eq!(
            section.subsections,
            [Subsection {
                title: "What Happened".to_string(),
                items: vec!["Fast flow".to_string(), "Good crema".to_string()],
            }]
        );
        assert_eq!(
            section.assessment,
            Some(AssessmentBadge {
                status: "Good".to_string(),
                tier: Tier::Good,
            })
        );
    }

    #[test]
    fn labels_with_text_on_the_same_line() {
        let input = "## 1. A\n**What Happened:**\n- Fast flow\n**Why:** grind too coarse\n- Dose low\n**Assessment:** [Needs improvement]\n";

        let sections = parse_structured_analysis(input);

        assert_eq!(
            sections[0].subsections,
            [
                Subsection {
                    title: "What Happened".to_string(),
                    items: vec!["Fast flow".to_string()],
                },
                Subsection {
                    title: "Why".to_string(),
                    items: vec!["grind too coarse".to_string(), "Dose low".to_string()],
                },
            ]
        );
        assert_eq!(
            sections[0].assessment.as_ref().map(|badge| badge.tier),
            Some(Tier::NeedsImprovement)
        );
    }

    #[test]
    fn inline_label_next_to_assessment() {
        let input = "## 1. A\n**What Happened:** Fast flow\n**Assessment:** [Good]";

        let sections = parse_structured_analysis(input);

        assert!(!sections[0].is_fallback());
        assert_eq!(
            sections[0].subsections,
            [Subsection {
                title: "What Happened".to_string(),
                items: vec!["Fast flow".to_string()],
            }]
        );
        assert_eq!(
            sections[0].assessment,
            Some(AssessmentBadge {
                status: "Good".to_string(),
                tier: Tier::Good,
            })
        );
    }

    #[test]
    fn no_headers_is_unstructured() {
        assert!(parse_structured_analysis("Just a paragraph of advice.").is_empty());
        assert!(parse_structured_analysis("").is_empty());
        assert!(parse_structured_analysis("# Title\n**Label:**\n- item").is_empty());
    }

    #[test]
    fn section_without_labels_keeps_raw_content() {
        let input = "## 2. Root Cause Analysis\nSome unlabeled prose with no bold headers.\n";

        let sections = parse_structured_analysis(input);

        assert_eq!(sections.len(), 1);
        assert!(sections[0].is_fallback());
        assert!(sections[0].subsections.is_empty());
        assert_eq!(
            sections[0].raw_content,
            "Some unlabeled prose with no bold headers."
        );
        assert_eq!(sections[0].assessment, None);
    }

    #[test]
    fn duplicate_headers_are_kept() {
        let sections = parse_structured_analysis("## 1. A\nfirst\n## 1. A\nsecond\n");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "1. A");
        assert_eq!(sections[1].title, "1. A");
        assert_eq!(sections[0].raw_content, "first");
        assert_eq!(sections[1].raw_content, "second");
    }

    #[test]
    fn sections_follow_header_order() {
        let input = "## 3. Third\n## 1. First\n## 2. Second\n## 1. First again\n";
        let titles: Vec<_> = parse_structured_analysis(input)
            .into_iter()
            .map(|section| section.title)
            .collect();

        assert_eq!(
            titles,
            ["3. Third", "1. First", "2. Second", "1. First again"]
        );
    }

    #[test]
    fn empty_subsections_are_dropped() {
        let input = "## 1. A\n**Blank:**\n\n   \n**Labels Only:**\n**Assessment:** [Good]\n**Kept:**\n- item\n";

        let sections = parse_structured_analysis(input);

        let titles: Vec<_> = sections[0]
            .subsections
            .iter()
            .map(|subsection| subsection.title.as_str())
            .collect();
        assert_eq!(titles, ["Kept"]);
    }

    #[test]
    fn all_subsections_empty_falls_back_to_raw_content() {
        let input = "## 1. A\n**Blank:**\n\n**Assessment:** [Acceptable]\n";

        let sections = parse_structured_analysis(input);

        assert!(sections[0].is_fallback());
        assert_eq!(
            sections[0].raw_content,
            "**Blank:**\n\n**Assessment:** [Acceptable]"
        );
        assert_eq!(
            sections[0].assessment.as_ref().map(|badge| badge.tier),
            Some(Tier::Acceptable)
        );
    }

    #[test]
    fn mixed_keywords_resolve_by_priority() {
        let input = "## 1. A\n**Assessment:** [Good extraction, problematic puck]\n";
        let badge = parse_structured_analysis(input)[0]
            .assessment
            .clone()
            .unwrap();
        assert_eq!(badge.tier, Tier::Good);
    }

    #[test]
    fn unknown_status_is_preserved() {
        let input = "## 1. A\n**Assessment:** [Excellent work]\n";
        let badge = parse_structured_analysis(input)[0]
            .assessment
            .clone()
            .unwrap();
        assert_eq!(badge.tier, Tier::Unknown);
        assert_eq!(badge.status, "Excellent work");
    }

    #[test]
    fn assessments_do_not_leak_between_sections() {
        let input = "## 1. A\n**Assessment:** [Good]\n## 2. B\nNo badge here.\n";
        let sections = parse_structured_analysis(input);

        assert!(sections[0].assessment.is_some());
        assert!(sections[1].assessment.is_none());
    }

    #[test]
    fn full_report() {
        let sections = parse_structured_analysis(FULL_REPORT);

        assert_eq!(sections.len(), 3);

        let performance = &sections[0];
        assert_eq!(performance.subsections.len(), 1);
        assert_eq!(
            performance.assessment.as_ref().map(|badge| badge.tier),
            Some(Tier::Good)
        );

        let root_cause = &sections[1];
        assert_eq!(root_cause.subsections.len(), 1);
        assert_eq!(root_cause.subsections[0].title, "Primary Factors");
        assert_eq!(
            root_cause.subsections[0].items,
            ["Grind too coarse", "Dose slightly low"]
        );
        assert_eq!(
            root_cause.assessment.as_ref().map(|badge| badge.tier),
            Some(Tier::NeedsImprovement)
        );

        let adjustments = &sections[2];
        assert!(adjustments.is_fallback());
        assert_eq!(adjustments.raw_content, "Grind two steps finer and retry.");
        assert_eq!(adjustments.assessment, None);
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(
            parse_structured_analysis(FULL_REPORT),
            parse_structured_analysis(FULL_REPORT)
        );
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let sections = parse_structured_analysis("## 2. Root Cause Analysis\nprose\n");
        let json = serde_json::to_value(&sections).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "number": "2",
                "title": "2. Root Cause Analysis",
                "rawContent": "prose",
                "subsections": []
            }])
        );
    }
}
