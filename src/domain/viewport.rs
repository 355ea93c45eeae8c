use std::collections::BTreeMap;

/// Reveal cards fire once a tenth is visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// The hero statistics strip waits until half of it is on screen.
pub const HERO_STATS_THRESHOLD: f64 = 0.5;
/// Browsers report ratios a hair under the configured threshold when crossing it.
const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Self {
        Self(if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 })
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn reached_by(&self, visible_ratio: f64) -> bool {
        visible_ratio + RATIO_TOLERANCE >= self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(pub u32);

/// One-shot visibility registrations.
///
/// A registration fires at most once and is forgotten as soon as it does, so
/// re-entering the viewport never triggers the callback again.
#[derive(Debug, Default)]
pub struct ViewportRegistry {
    next_id: u32,
    entries: BTreeMap<ObservationId, Threshold>,
}

impl ViewportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, threshold: Threshold) -> ObservationId {
        let id = ObservationId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, threshold);
        id
    }

    /// Feed an intersection sample. Returns `true` exactly once per registration.
    pub fn report(&mut self, id: ObservationId, is_intersecting: bool, visible_ratio: f64) -> bool {
        let Some(threshold) = self.entries.get(&id) else {
            return false;
        };
        if !is_intersecting || !threshold.reached_by(visible_ratio) {
            return false;
        }
        self.entries.remove(&id);
        true
    }

    pub fn unregister(&mut self, id: ObservationId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn is_observing(&self, id: ObservationId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
