//! Filterable card listings (blog posts, events) and the tab strips that drive them.

/// Delay before a shown card fades in, after `display: block` lands.
pub const CARD_SHOW_DELAY_MS: u32 = 10;
/// Fade-out time before a hidden card leaves the layout.
pub const CARD_HIDE_DELAY_MS: u32 = 300;

const ALL: &str = "all";

/// A row of mutually exclusive buttons: one active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabGroup {
    len: usize,
    active: Option<usize>,
}

impl TabGroup {
    /// `initially_active` is the first button the markup already marks active.
    pub fn new(len: usize, initially_active: Option<usize>) -> Self {
        Self { len, active: initially_active.filter(|index| *index < len) }
    }

    /// Returns `false` for an out-of-range index. Re-selecting the active tab is allowed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Active flag per button, clear-then-set.
    pub fn flags(&self) -> Vec<bool> {
        (0..self.len).map(|index| Some(index) == self.active).collect()
    }
}

/// Which cards a listing shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFilter {
    All,
    Tag(String),
    Search(String),
}

impl CardFilter {
    /// From a button's `data-category`/`data-filter`; missing or `all` shows everything.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            None | Some("") | Some(ALL) => CardFilter::All,
            Some(tag) => CardFilter::Tag(tag.to_string()),
        }
    }

    /// Case-insensitive substring search. An empty query matches every card.
    pub fn search(query: &str) -> Self {
        CardFilter::Search(query.to_lowercase())
    }

    pub fn matches(&self, card: &ListingCard) -> bool {
        match self {
            CardFilter::All => true,
            CardFilter::Tag(tag) => card.tag.as_deref() == Some(tag.as_str()),
            CardFilter::Search(query) => {
                card.title.to_lowercase().contains(query.as_str())
                    || card.excerpt.to_lowercase().contains(query.as_str())
            }
        }
    }
}

/// What a filter reads from one card's markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingCard {
    pub tag: Option<String>,
    pub title: String,
    pub excerpt: String,
}

/// Two-step style change for one card: applied now, then after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTransition {
    pub immediate: &'static [(&'static str, &'static str)],
    pub delay_ms: u32,
    pub delayed: &'static [(&'static str, &'static str)],
}

const SHOW: CardTransition = CardTransition {
    immediate: &[("display", "block")],
    delay_ms: CARD_SHOW_DELAY_MS,
    delayed: &[("opacity", "1"), ("transform", "translateY(0)")],
};

const HIDE: CardTransition = CardTransition {
    immediate: &[("opacity", "0"), ("transform", "translateY(20px)")],
    delay_ms: CARD_HIDE_DELAY_MS,
    delayed: &[("display", "none")],
};

impl CardTransition {
    pub fn for_visibility(visible: bool) -> Self {
        if visible { SHOW } else { HIDE }
    }
}

/// Transition per card, in card order.
pub fn plan_transitions(filter: &CardFilter, cards: &[ListingCard]) -> Vec<CardTransition> {
    cards.iter().map(|card| CardTransition::for_visibility(filter.matches(card))).collect()
}
