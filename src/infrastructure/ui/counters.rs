use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::ControlFlow;
use std::rc::Rc;

use crate::domain::counters::{CounterPhase, CounterRegistry, MetricTarget, StartOutcome};
use crate::domain::logging::LogComponent;
use crate::infrastructure::dom;
use crate::infrastructure::timers::{TaskHandle, spawn_interval};
use crate::{log_debug, log_warn};

/// Writes counter frames into elements looked up by id.
pub struct CounterDriver {
    registry: Rc<RefCell<CounterRegistry>>,
    tasks: RefCell<HashMap<String, TaskHandle>>,
}

impl Default for CounterDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterDriver {
    pub fn new() -> Self {
        Self { registry: Rc::new(RefCell::new(CounterRegistry::new())), tasks: RefCell::new(HashMap::new()) }
    }

    /// Start the count-up for `target`. A missing element is skipped.
    pub fn animate(&self, target: MetricTarget) -> Option<StartOutcome> {
        let Some(element) = dom::element_by_id(&target.id) else {
            log_warn!(LogComponent::Counters, "no element #{}", target.id);
            return None;
        };

        let id = target.id.clone();
        let tick_ms = target.tick_ms;
        let rendered = element.text_content();
        let outcome = self.registry.borrow_mut().begin(target, rendered.as_deref().map(str::trim));
        if outcome != StartOutcome::Started {
            return Some(outcome);
        }

        log_debug!(LogComponent::Counters, "animating #{}", id);
        let registry = Rc::clone(&self.registry);
        let tick_id = id.clone();
        let task = spawn_interval(tick_ms, move || {
            let Some(frame) = registry.borrow_mut().tick(&tick_id) else {
                return ControlFlow::Break(());
            };
            element.set_text_content(Some(&frame.text));
            if frame.finished { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
        });
        self.tasks.borrow_mut().insert(id, task);
        Some(outcome)
    }

    pub fn animate_all(&self, targets: impl IntoIterator<Item = MetricTarget>) {
        for target in targets {
            self.animate(target);
        }
    }

    pub fn phase(&self, id: &str) -> Option<CounterPhase> {
        self.registry.borrow().phase(id)
    }

    /// Stop every running count-up; the elements keep their last frame.
    pub fn dispose(&self) {
        let cancelled = self.registry.borrow_mut().cancel_all();
        self.tasks.borrow_mut().clear();
        if cancelled > 0 {
            log_debug!(LogComponent::Counters, "cancelled {} counters", cancelled);
        }
    }
}
