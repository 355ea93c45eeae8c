/// The indicator switches a little before the section top reaches the viewport top.
pub const SCROLL_LOOK_AHEAD_PX: f64 = 200.0;
pub const HEADER_SCROLLED_OFFSET_PX: f64 = 100.0;

/// Value Object - a `section[id]` measured from live layout
#[derive(Debug, Clone, PartialEq)]
pub struct SectionAnchor {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// A `.nav-dot` bound to a section through its `data-section` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavIndicator {
    pub section: String,
    pub active: bool,
}

impl NavIndicator {
    pub fn new(section: impl Into<String>) -> Self {
        Self { section: section.into(), active: false }
    }

    pub fn matches(&self, section_id: &str) -> bool {
        self.section.eq_ignore_ascii_case(section_id)
    }
}

/// Tracks which section is "current" for the side navigation dots.
///
/// The current section is sticky: scroll positions that fall between or
/// outside every anchor keep the previous value.
#[derive(Debug, Clone)]
pub struct SectionNavTracker {
    current: Option<String>,
    look_ahead: f64,
}

impl Default for SectionNavTracker {
    fn default() -> Self {
        Self { current: None, look_ahead: SCROLL_LOOK_AHEAD_PX }
    }
}

impl SectionNavTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Anchor containing `scroll_offset + look_ahead`; document order, last match wins.
    pub fn locate<'a>(&self, scroll_offset: f64, anchors: &'a [SectionAnchor]) -> Option<&'a SectionAnchor> {
        let position = scroll_offset + self.look_ahead;
        anchors.iter().rev().find(|anchor| anchor.contains(position))
    }

    /// Returns `true` when the current section changed.
    pub fn update(&mut self, scroll_offset: f64, anchors: &[SectionAnchor]) -> bool {
        let Some(anchor) = self.locate(scroll_offset, anchors) else {
            return false;
        };
        if self.current.as_deref() == Some(anchor.id.as_str()) {
            return false;
        }
        self.current = Some(anchor.id.clone());
        true
    }

    /// Clear every indicator, then mark the first one matching the current section.
    /// Returns the index of the active indicator.
    pub fn apply(&self, indicators: &mut [NavIndicator]) -> Option<usize> {
        for indicator in indicators.iter_mut() {
            indicator.active = false;
        }
        let current = self.current.as_deref()?;
        let index = indicators.iter().position(|indicator| indicator.matches(current))?;
        indicators[index].active = true;
        Some(index)
    }

    /// Indicators and sections pair up by position in the document.
    pub fn click_target(index: usize, anchors: &[SectionAnchor]) -> Option<&SectionAnchor> {
        anchors.get(index)
    }
}

pub fn header_scrolled(scroll_offset: f64) -> bool {
    scroll_offset > HEADER_SCROLLED_OFFSET_PX
}
