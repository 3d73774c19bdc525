//! Writing parsed sections back out in canonical report markup.
//!
//! The output uses the same conventions the parser reads, so parsing it again
//! gives back the same titles, subsections and badges. Prose outside labeled
//! subsections is not written, except for sections without subsections, which
//! are written from their raw content.

use std::fmt;

use crate::domain::Section;

/// Writes sections in canonical report markup.
///
/// Sections are separated by a blank line. Each structured section is written
/// as its header, its labeled subsections with `- ` bullets, and its
/// assessment (if any) as a bracketed annotation.
#[must_use]
pub fn to_markup(sections: &[Section]) -> String {
    Markup(sections).to_string()
}

struct Markup<'a>(&'a [Section]);

impl fmt::Display for Markup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write_section(f, section)?;
        }
        Ok(())
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
    writeln!(f, "## {}", section.title)?;

    if section.is_fallback() {
        if !section.raw_content.is_empty() {
            writeln!(f, "{}", section.raw_content)?;
        }
        return Ok(());
    }

    for subsection in &section.subsections {
        writeln!(f, "**{}:**", subsection.title)?;
        for item in &subsection.items {
            writeln!(f, "- {item}")?;
        }
    }

    if let Some(badge) = &section.assessment {
        writeln!(f, "**Assessment:** [{}]", badge.status)?;
    }
    Ok(())
}
