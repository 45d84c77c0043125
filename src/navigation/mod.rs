//! Navbar, mobile menu, active-link tracking and in-page anchor scrolling.

pub mod menu;
pub mod scroll;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Top,
    Scrolled,
}

impl NavbarState {
    pub fn at(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarState::Scrolled
        } else {
            NavbarState::Top
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarState::Top => "rgba(10, 10, 10, 0.95)",
            NavbarState::Scrolled => "rgba(10, 10, 10, 0.98)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavbarState::Top => "none",
            NavbarState::Scrolled => "0 2px 20px rgba(0, 0, 0, 0.3)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// The last section (in document order) whose top, less `lookahead`, has
/// been scrolled past.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - lookahead)
        .last()
        .map(|s| s.id.as_str())
}

/// The `href` a nav link must carry to be marked active. With no active
/// section this is a bare `#`.
pub fn active_href(active: Option<&str>) -> String {
    format!("#{}", active.unwrap_or(""))
}

/// Window offset that puts a section just below the fixed navbar.
pub fn anchor_scroll_top(section_top: f64, navbar_offset: f64) -> f64 {
    section_top - navbar_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(tops: &[(&str, f64)]) -> Vec<SectionOffset> {
        tops.iter()
            .map(|(id, top)| SectionOffset { id: id.to_string(), top: *top })
            .collect()
    }

    #[test]
    fn navbar_state_depends_only_on_offset() {
        assert_eq!(NavbarState::at(150.0, 100.0), NavbarState::Scrolled);
        assert_eq!(NavbarState::at(0.0, 100.0), NavbarState::Top);
        assert_eq!(NavbarState::at(100.0, 100.0), NavbarState::Top);
        assert_eq!(NavbarState::at(150.0, 100.0), NavbarState::Scrolled);
    }

    #[test]
    fn later_sections_win() {
        let s = sections(&[("home", 0.0), ("about", 500.0), ("projects", 1200.0)]);
        assert_eq!(active_section(&s, 600.0, 200.0), Some("about"));
        assert_eq!(active_section(&s, 300.0, 200.0), Some("about"));
        assert_eq!(active_section(&s, 299.0, 200.0), Some("home"));
        assert_eq!(active_section(&s, 1000.0, 200.0), Some("projects"));
    }

    #[test]
    fn nothing_active_before_first_section() {
        let s = sections(&[("intro", 400.0)]);
        assert_eq!(active_section(&s, 0.0, 200.0), None);
        assert_eq!(active_href(None), "#");
        assert_eq!(active_href(Some("intro")), "#intro");
    }

    #[test]
    fn anchor_lands_below_navbar() {
        assert_eq!(anchor_scroll_top(900.0, 70.0), 830.0);
    }
}
