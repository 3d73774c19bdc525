//! Extracting bullet items from a subsection body.

/// Bullet markers stripped from the start of an item.
const BULLETS: [char; 2] = ['-', '•'];

/// Extracts the items of a subsection body, one per line.
///
/// Each line is trimmed and loses a single leading bullet marker. Lines that
/// end up empty, or that start with `*` (a stray label or annotation), are
/// skipped. The remaining lines keep their order.
#[must_use]
pub fn extract_items(body: &str) -> Vec<String> {
    body.lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty() && !line.starts_with('*'))
        .map(str::to_string)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix(BULLETS).map_or(line, str::trim_start)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn strips_markers_and_keeps_order() {
        let body = "- Fast flow\n• Good crema\n  -   Bitter finish  \nplain line\n";
        assert_eq!(
            extract_items(body),
            ["Fast flow", "Good crema", "Bitter finish", "plain line"]
        );
    }

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(extract_items("\n\n- one\n   \n\n- two\n"), ["one", "two"]);
    }

    #[test]
    fn only_one_marker_is_stripped() {
        assert_eq!(extract_items("-- double\n- - nested"), ["- double", "- nested"]);
    }

    #[test]
    fn emphasis_lines_are_dropped() {
        let body = "- kept\n**Assessment:** [Good]\n- **bold item**\n*italic*\n";
        assert_eq!(extract_items(body), ["kept"]);
    }

    #[test]
    fn emphasis_inside_item_is_kept() {
        assert_eq!(
            extract_items("- Grind **two** steps finer"),
            ["Grind **two** steps finer"]
        );
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(extract_items("- one\r\n- two\r\n"), ["one", "two"]);
    }

    #[test_case(""; "empty")]
    #[test_case("\n  \n\t\n"; "whitespace only")]
    #[test_case("-\n•\n- "; "bare markers")]
    #[test_case("**Label:**\n**Other:**"; "labels only")]
    fn nothing_to_extract(body: &str) {
        assert!(extract_items(body).is_empty());
    }
}
