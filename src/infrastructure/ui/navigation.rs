use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::domain::logging::LogComponent;
use crate::domain::navigation::{MenuEvent, NavIndicator, SectionAnchor, SectionNavTracker, header_scrolled};
use crate::infrastructure::dom;
use crate::infrastructure::ui::menu::MenuBinding;
use crate::log_trace;

const ACTIVE: &str = "active";
const SCROLLED: &str = "scrolled";

/// Live layout of every `section[id]`, in document order.
pub fn measure_sections() -> Vec<(Element, SectionAnchor)> {
    dom::query_all("section[id]")
        .into_iter()
        .filter_map(|element| {
            let html = element.dyn_ref::<HtmlElement>()?;
            let anchor = SectionAnchor::new(element.id(), html.offset_top() as f64, element.client_height() as f64);
            Some((element, anchor))
        })
        .collect()
}

fn read_indicators(dots: &[Element]) -> Vec<NavIndicator> {
    dots.iter()
        .map(|dot| NavIndicator::new(dot.get_attribute("data-section").unwrap_or_default()))
        .collect()
}

struct ScrollState {
    tracker: SectionNavTracker,
    dots: Vec<Element>,
    header: Option<Element>,
    track_sections: bool,
}

impl ScrollState {
    fn on_scroll(&mut self) {
        let offset = dom::scroll_offset();

        if let Some(header) = &self.header {
            dom::set_class(header, SCROLLED, header_scrolled(offset));
        }
        if !self.track_sections {
            return;
        }

        let anchors: Vec<SectionAnchor> = measure_sections().into_iter().map(|(_, anchor)| anchor).collect();
        if self.tracker.update(offset, &anchors) {
            log_trace!(
                LogComponent::Navigation,
                "current section: {}",
                self.tracker.current().unwrap_or("-")
            );
        }
        self.reflect();
    }

    fn reflect(&self) {
        let mut indicators = read_indicators(&self.dots);
        self.tracker.apply(&mut indicators);
        for (dot, indicator) in self.dots.iter().zip(&indicators) {
            dom::set_class(dot, ACTIVE, indicator.active);
        }
    }
}

/// Scroll-driven side navigation and header state.
pub struct ScrollBinding {
    state: Rc<RefCell<ScrollState>>,
    scroll: Option<EventListener>,
    clicks: Vec<EventListener>,
}

impl ScrollBinding {
    /// `track_sections` enables the `.nav-dot` indicators, `header_effect` the `scrolled` class.
    pub fn attach(track_sections: bool, header_effect: bool, menu: Option<Rc<MenuBinding>>) -> Self {
        let dots = if track_sections { dom::query_all(".nav-dot") } else { Vec::new() };
        let header = if header_effect { dom::query("header") } else { None };

        let clicks = dots
            .iter()
            .enumerate()
            .map(|(index, dot)| {
                let menu = menu.clone();
                EventListener::new(dot, "click", move |_| {
                    let sections = measure_sections();
                    let anchors: Vec<SectionAnchor> = sections.iter().map(|(_, anchor)| anchor.clone()).collect();
                    if SectionNavTracker::click_target(index, &anchors).is_none() {
                        return;
                    }
                    dom::smooth_scroll_into_view(&sections[index].0);
                    if let Some(menu) = &menu {
                        menu.handle(MenuEvent::IndicatorClicked);
                    }
                })
            })
            .collect();

        let state = Rc::new(RefCell::new(ScrollState {
            tracker: SectionNavTracker::new(),
            dots,
            header,
            track_sections,
        }));
        state.borrow_mut().on_scroll();

        let scroll_state = Rc::clone(&state);
        let scroll = dom::on_window("scroll", move |_| {
            scroll_state.borrow_mut().on_scroll();
        });

        Self { state, scroll, clicks }
    }

    pub fn current_section(&self) -> Option<String> {
        self.state.borrow().tracker.current().map(str::to_string)
    }

    pub fn detach(self) {
        drop(self.clicks);
        drop(self.scroll);
    }
}
