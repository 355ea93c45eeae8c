use std::rc::Rc;

use crate::domain::counters::MetricTarget;
use crate::domain::errors::RenderingError;
use crate::domain::logging::LogComponent;
use crate::domain::viewport::{HERO_STATS_THRESHOLD, REVEAL_THRESHOLD};
use crate::infrastructure::dom;
use crate::infrastructure::observer::ViewportObserver;
use crate::infrastructure::ui::counters::CounterDriver;
use crate::log_debug;

pub const REVEAL_CARD_SELECTOR: &str = ".feature-card, .service-card, .value-card, .team-member";
const VISIBLE: &str = "visible";

/// What a page wants revealed on first sight.
#[derive(Debug, Clone, Default)]
pub struct RevealPlan {
    pub cards: bool,
    pub hero_metrics: Option<Vec<MetricTarget>>,
    pub statistics_metrics: Option<Vec<MetricTarget>>,
}

/// One-shot reveals: cards fade in, stat blocks start counting.
pub struct RevealBinding {
    reveal: ViewportObserver,
    hero: Option<ViewportObserver>,
}

impl RevealBinding {
    pub fn attach(plan: RevealPlan, counters: Rc<CounterDriver>) -> Result<Self, RenderingError> {
        let reveal = ViewportObserver::new(REVEAL_THRESHOLD)?;

        if plan.cards {
            for card in dom::query_all(REVEAL_CARD_SELECTOR) {
                reveal.observe(card, |card| dom::set_class(&card, VISIBLE, true));
            }
        }

        if let Some(metrics) = plan.statistics_metrics {
            if let Some(section) = dom::query(".statistics") {
                let counters = Rc::clone(&counters);
                reveal.observe(section, move |section| {
                    dom::set_class(&section, VISIBLE, true);
                    counters.animate_all(metrics);
                });
            }
        }

        let hero = match (plan.hero_metrics, dom::query(".hero-stats")) {
            (Some(metrics), Some(stats)) => {
                let observer = ViewportObserver::new(HERO_STATS_THRESHOLD)?;
                observer.observe(stats, move |_| counters.animate_all(metrics));
                Some(observer)
            }
            _ => None,
        };

        log_debug!(
            LogComponent::Viewport,
            "watching {} elements ({} hero)",
            reveal.pending(),
            hero.as_ref().map_or(0, ViewportObserver::pending)
        );
        Ok(Self { reveal, hero })
    }

    pub fn pending(&self) -> usize {
        self.reveal.pending() + self.hero.as_ref().map_or(0, ViewportObserver::pending)
    }

    pub fn detach(&self) {
        self.reveal.disconnect();
        if let Some(hero) = &self.hero {
            hero.disconnect();
        }
    }
}
