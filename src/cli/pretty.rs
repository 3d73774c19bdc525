//! Terminal presentation of parsed reports.

use std::fmt;

use structured_report::{DisplayTable, Section};

use super::terminal::{Colorize, rule_width};

/// Renders sections as titled cards.
///
/// A document without sections is printed as it is, trimmed. In the narrow
/// layout nothing is indented.
pub fn render(document: &str, sections: &[Section], table: &DisplayTable, narrow: bool) -> String {
    if sections.is_empty() {
        return format!("{}\n", document.trim());
    }

    Cards {
        sections,
        table,
        indent: if narrow { "" } else { "  " },
    }
    .to_string()
}

struct Cards<'a> {
    sections: &'a [Section],
    table: &'a DisplayTable,
    indent: &'static str,
}

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            self.write_card(f, section)?;
        }
        Ok(())
    }
}

impl Cards<'_> {
    fn write_card(&self, f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
        let display = self.table.resolve(&section.title);
        let indent = self.indent;

        write!(
            f,
            "{} {}",
            format!("[{}]", display.icon).dim(),
            section.title.token(&display.color_token).bold()
        )?;
        if let Some(badge) = &section.assessment {
            write!(
                f,
                "  {}",
                format!("● {}", badge.status).token(badge.tier.color_token())
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            "─".repeat(rule_width()).token(&display.border_color_token)
        )?;

        if section.is_fallback() {
            for line in section.raw_content.lines() {
                writeln!(f, "{indent}{line}")?;
            }
            return Ok(());
        }

        for subsection in &section.subsections {
            writeln!(f, "{indent}{}", subsection.title.bold())?;
            for item in &subsection.items {
                writeln!(f, "{indent}{indent}• {item}")?;
            }
        }
        Ok(())
    }
}

/// One line per section: title, assessment tier and subsection count.
pub fn summary(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "unstructured\n".to_string();
    }

    sections
        .iter()
        .map(|section| {
            let tier = section
                .assessment
                .as_ref()
                .map_or("-", |badge| badge.tier.as_str());
            if section.is_fallback() {
                format!("{}\t{tier}\tunstructured\n", section.title)
            } else {
                format!(
                    "{}\t{tier}\t{} subsections\n",
                    section.title,
                    section.subsections.len()
                )
            }
        })
        .collect()
}
