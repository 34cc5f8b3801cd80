//! Removal of the Sphinx search box.

/// Opening tag of the search box container
pub const SEARCH_BOX_START: &str = r#"<div id="searchbox" style="display: none" role="search">"#;

/// Script that reveals the search box; last line of the region
pub const SEARCH_BOX_END: &str =
    r#"<script>document.getElementById('searchbox').style.display = "block"</script>"#;

/// Position relative to the search-widget region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchWidgetState {
    #[default]
    Outside,
    Inside,
}

impl SearchWidgetState {
    /// Advance over one line and report whether it belongs to the region.
    ///
    /// The start and end marker lines are part of the region. A line carrying
    /// both markers is blanked and leaves the state `Outside`.
    pub fn step(&mut self, line: &str) -> bool {
        if *self == SearchWidgetState::Outside && line.contains(SEARCH_BOX_START) {
            tracing::debug!("Entering search widget");
            *self = SearchWidgetState::Inside;
        }

        if *self == SearchWidgetState::Outside {
            return false;
        }

        if line.contains(SEARCH_BOX_END) {
            tracing::debug!("Leaving search widget");
            *self = SearchWidgetState::Outside;
        }
        true
    }
}

/// Blank every line of the search-widget region in place
pub fn strip_search_widget(lines: &mut [String]) {
    let mut state = SearchWidgetState::default();
    for line in lines.iter_mut() {
        if state.step(line) {
            line.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_region_is_blanked_inclusive() {
        let mut html = lines(&[
            "<body>",
            SEARCH_BOX_START,
            "  <h3>Quick search</h3>",
            "  <form></form>",
            "</div>",
            SEARCH_BOX_END,
            "<footer>",
        ]);
        strip_search_widget(&mut html);
        assert_eq!(html, lines(&["<body>", "", "", "", "", "", "<footer>"]));
    }

    #[test]
    fn test_unterminated_region_blanks_to_end() {
        let mut html = lines(&["a", SEARCH_BOX_START, "b", "c"]);
        strip_search_widget(&mut html);
        assert_eq!(html, lines(&["a", "", "", ""]));
    }

    #[test]
    fn test_end_marker_outside_region_is_kept() {
        let mut html = lines(&[SEARCH_BOX_END, "x"]);
        strip_search_widget(&mut html);
        assert_eq!(html, lines(&[SEARCH_BOX_END, "x"]));
    }

    #[test]
    fn test_both_markers_on_one_line() {
        let mut state = SearchWidgetState::default();
        let line = format!("{}{}", SEARCH_BOX_START, SEARCH_BOX_END);
        assert!(state.step(&line));
        assert_eq!(state, SearchWidgetState::Outside);
        assert!(!state.step("after"));
    }

    #[test]
    fn test_multiple_regions() {
        let mut html = lines(&[
            SEARCH_BOX_START,
            SEARCH_BOX_END,
            "keep",
            SEARCH_BOX_START,
            SEARCH_BOX_END,
        ]);
        strip_search_widget(&mut html);
        assert_eq!(html, lines(&["", "", "keep", "", ""]));
    }
}
