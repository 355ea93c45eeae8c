use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::domain::listing::{CardFilter, ListingCard, TabGroup, plan_transitions};
use crate::domain::logging::LogComponent;
use crate::infrastructure::dom;
use crate::infrastructure::timers::{TaskHandle, spawn_delay};
use crate::log_debug;

const ACTIVE: &str = "active";

/// Buttons matched by one selector; exactly one carries `active` after a click.
pub struct TabStrip {
    _clicks: Vec<EventListener>,
}

impl TabStrip {
    pub fn attach(selector: &str, on_select: impl Fn(&Element) + 'static) -> Option<Self> {
        let buttons = Rc::new(dom::query_all(selector));
        if buttons.is_empty() {
            return None;
        }

        let initially_active = buttons.iter().position(|button| dom::has_class(button, ACTIVE));
        let group = Rc::new(RefCell::new(TabGroup::new(buttons.len(), initially_active)));
        let on_select: Rc<dyn Fn(&Element)> = Rc::new(on_select);

        let clicks = buttons
            .iter()
            .enumerate()
            .map(|(index, button)| {
                let buttons = Rc::clone(&buttons);
                let group = Rc::clone(&group);
                let on_select = Rc::clone(&on_select);
                EventListener::new(button, "click", move |_| {
                    let flags = {
                        let mut group = group.borrow_mut();
                        if !group.select(index) {
                            return;
                        }
                        group.flags()
                    };
                    for (button, active) in buttons.iter().zip(flags) {
                        dom::set_class(button, ACTIVE, active);
                    }
                    on_select(&buttons[index]);
                })
            })
            .collect();

        Some(Self { _clicks: clicks })
    }
}

/// The `.timeframe` buttons above the live chart. Selection is cosmetic.
pub fn timeframe_tabs() -> Option<TabStrip> {
    TabStrip::attach(".timeframe", |tab| {
        log_debug!(
            LogComponent::Listing,
            "switched to {} timeframe",
            tab.text_content().unwrap_or_default().trim()
        );
    })
}

fn child_text(card: &Element, selector: &str) -> String {
    dom::query_within(card, selector).and_then(|el| el.text_content()).unwrap_or_default()
}

/// Cards under one selector, shown and hidden with a short fade.
struct CardList {
    card_selector: &'static str,
    tag_attribute: &'static str,
    pending: RefCell<Vec<TaskHandle>>,
}

impl CardList {
    fn new(card_selector: &'static str, tag_attribute: &'static str) -> Self {
        Self { card_selector, tag_attribute, pending: RefCell::new(Vec::new()) }
    }

    fn read(&self) -> Vec<(HtmlElement, ListingCard)> {
        dom::query_all(self.card_selector)
            .into_iter()
            .filter_map(|element| {
                let card = ListingCard {
                    tag: element.get_attribute(self.tag_attribute),
                    title: child_text(&element, ".post-title"),
                    excerpt: child_text(&element, ".post-excerpt"),
                };
                Some((element.dyn_into::<HtmlElement>().ok()?, card))
            })
            .collect()
    }

    /// Starting a new filter drops the fades still pending from the previous one.
    fn apply(&self, filter: &CardFilter) {
        let (elements, cards): (Vec<HtmlElement>, Vec<ListingCard>) = self.read().into_iter().unzip();
        let plan = plan_transitions(filter, &cards);

        let pending = elements
            .into_iter()
            .zip(plan)
            .map(|(element, transition)| {
                for (property, value) in transition.immediate {
                    dom::set_style(&element, property, value);
                }
                spawn_delay(transition.delay_ms, move || {
                    for (property, value) in transition.delayed {
                        dom::set_style(&element, property, value);
                    }
                })
            })
            .collect();
        *self.pending.borrow_mut() = pending;
        log_debug!(LogComponent::Listing, "{:?} over {} cards", filter, cards.len());
    }

    fn cancel(&self) {
        self.pending.borrow_mut().clear();
    }
}

/// A filterable page: blog posts or events.
pub struct ListingBinding {
    cards: Rc<CardList>,
    _tabs: Option<TabStrip>,
    _search: Vec<EventListener>,
}

impl ListingBinding {
    /// `.category-btn` tabs and the `.blog-search` box over `.blog-post-card`s.
    pub fn attach_blog() -> Option<Self> {
        dom::query(".blog-content")?;
        let cards = Rc::new(CardList::new(".blog-post-card", "data-category"));
        let tabs = tag_tabs(".category-btn", "data-category", &cards);

        let mut search = Vec::new();
        let search_box = dom::query(".blog-search");
        let input = search_box
            .as_ref()
            .and_then(|root| dom::query_within(root, "input"))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let (Some(root), Some(input)) = (search_box, input) {
            if let Some(button) = dom::query_within(&root, "button") {
                let (cards, input) = (Rc::clone(&cards), input.clone());
                search.push(EventListener::new(&button, "click", move |_| {
                    cards.apply(&CardFilter::search(&input.value()));
                }));
            }
            let (cards, field) = (Rc::clone(&cards), input.clone());
            search.push(EventListener::new(&input, "keypress", move |event| {
                if event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Enter") {
                    cards.apply(&CardFilter::search(&field.value()));
                }
            }));
        }

        Some(Self { cards, _tabs: tabs, _search: search })
    }

    /// `.filter-btn` tabs over `.event-card`s keyed by `data-type`.
    pub fn attach_events() -> Option<Self> {
        dom::query(".events-content")?;
        let cards = Rc::new(CardList::new(".event-card", "data-type"));
        let tabs = tag_tabs(".filter-btn", "data-filter", &cards);
        Some(Self { cards, _tabs: tabs, _search: Vec::new() })
    }

    pub fn detach(self) {
        self.cards.cancel();
    }
}

fn tag_tabs(selector: &str, tag_attribute: &'static str, cards: &Rc<CardList>) -> Option<TabStrip> {
    let cards = Rc::clone(cards);
    TabStrip::attach(selector, move |button| {
        cards.apply(&CardFilter::from_tag(button.get_attribute(tag_attribute).as_deref()));
    })
}
