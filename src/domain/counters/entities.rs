use super::value_objects::{FramePhase, MetricTarget};

/// Lifecycle of one animated element.
///
/// `Idle -> Running -> Complete` is the only forward path; `Cancelled` is
/// reached on teardown. Terminal phases never restart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    Idle,
    Running { current: f64 },
    Complete,
    Cancelled,
}

impl CounterPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CounterPhase::Complete | CounterPhase::Cancelled)
    }
}

/// Text produced by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Entity - linear 0 → target ramp for a single statistic.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: MetricTarget,
    phase: CounterPhase,
    displayed: String,
    ticks: u32,
}

impl CounterAnimation {
    pub fn new(target: MetricTarget) -> Self {
        let displayed = target.zero_text();
        Self { target, phase: CounterPhase::Idle, displayed, ticks: 0 }
    }

    /// An element that already shows a non-zero value is adopted as finished.
    pub fn adopted(target: MetricTarget, rendered: &str) -> Self {
        Self {
            target,
            phase: CounterPhase::Complete,
            displayed: rendered.to_string(),
            ticks: 0,
        }
    }

    pub fn target(&self) -> &MetricTarget {
        &self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Idle → Running. Returns `false` (and changes nothing) from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Running { current: 0.0 };
        true
    }

    /// Advance one tick. `None` unless running.
    pub fn tick(&mut self) -> Option<CounterFrame> {
        let CounterPhase::Running { current } = self.phase else {
            return None;
        };

        self.ticks += 1;
        let next = current + self.target.increment();

        if next >= self.target.final_value || !next.is_finite() {
            // snap exactly onto the target, no overshoot
            self.displayed = self.target.render(self.target.final_value, FramePhase::Final);
            self.phase = CounterPhase::Complete;
            return Some(CounterFrame { text: self.displayed.clone(), finished: true });
        }

        self.displayed = self.target.render(next, FramePhase::Running);
        self.phase = CounterPhase::Running { current: next };
        Some(CounterFrame { text: self.displayed.clone(), finished: false })
    }

    /// Idle/Running → Cancelled. Terminal phases are left untouched.
    pub fn cancel(&mut self) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.phase = CounterPhase::Cancelled;
        true
    }

    /// Drive the remaining ticks synchronously; handy for previews and tests.
    pub fn run_to_completion(&mut self) -> Vec<String> {
        let mut frames = Vec::new();
        while let Some(frame) = self.tick() {
            frames.push(frame.text);
            if frame.finished {
                break;
            }
        }
        frames
    }
}
