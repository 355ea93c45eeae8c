use std::collections::HashMap;

use super::entities::{CounterAnimation, CounterFrame, CounterPhase};
use super::value_objects::MetricTarget;
use crate::log_debug;
use crate::domain::logging::LogComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// The element already went through (or is in) an animation.
    AlreadyAnimated,
    /// First sighting of an element that already renders a non-zero value.
    AdoptedRendered,
}

/// Per-element animation bookkeeping with an explicit "already animated" record.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    animations: HashMap<String, CounterAnimation>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `target`. `rendered` is the element's current text, when known.
    pub fn begin(&mut self, target: MetricTarget, rendered: Option<&str>) -> StartOutcome {
        if let Some(existing) = self.animations.get_mut(&target.id) {
            return if existing.start() {
                StartOutcome::Started
            } else {
                log_debug!(
                    LogComponent::Counters,
                    "{} already animated ({:?}), ignoring",
                    target.id,
                    existing.phase()
                );
                StartOutcome::AlreadyAnimated
            };
        }

        let id = target.id.clone();
        match rendered {
            Some(text) if !target.is_zero_text(text) => {
                self.animations.insert(id, CounterAnimation::adopted(target, text));
                StartOutcome::AdoptedRendered
            }
            _ => {
                let mut animation = CounterAnimation::new(target);
                animation.start();
                self.animations.insert(id, animation);
                StartOutcome::Started
            }
        }
    }

    pub fn tick(&mut self, id: &str) -> Option<CounterFrame> {
        self.animations.get_mut(id)?.tick()
    }

    pub fn cancel(&mut self, id: &str) -> bool {
        self.animations.get_mut(id).is_some_and(|animation| animation.cancel())
    }

    /// Cancel every non-terminal animation; returns how many were stopped.
    pub fn cancel_all(&mut self) -> usize {
        self.animations.values_mut().map(CounterAnimation::cancel).filter(|stopped| *stopped).count()
    }

    pub fn phase(&self, id: &str) -> Option<CounterPhase> {
        self.animations.get(id).map(CounterAnimation::phase)
    }

    pub fn displayed(&self, id: &str) -> Option<&str> {
        self.animations.get(id).map(CounterAnimation::displayed)
    }

    pub fn running_count(&self) -> usize {
        self.animations
            .values()
            .filter(|a| matches!(a.phase(), CounterPhase::Running { .. }))
            .count()
    }
}
