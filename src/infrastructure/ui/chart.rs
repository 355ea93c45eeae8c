use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use web_sys::Element;

use crate::domain::chart::generate_points;
use crate::domain::errors::DomError;
use crate::domain::logging::LogComponent;
use crate::domain::random::RandomSource;
use crate::infrastructure::rendering::render_sparkline;
use crate::infrastructure::timers::{TaskHandle, spawn_interval};
use crate::{log_trace, log_warn};

struct ChartState {
    container: Element,
    rng: Box<dyn RandomSource>,
    draw_delay_ms: u32,
    reveal: Option<TaskHandle>,
}

impl ChartState {
    fn redraw(&mut self) -> Result<(), DomError> {
        let points = generate_points(self.rng.as_mut());
        // dropping the previous handle cancels a reveal that has not fired yet
        self.reveal = Some(render_sparkline(&self.container, &points, self.draw_delay_ms)?);
        log_trace!(LogComponent::Chart, "sparkline redrawn with {} points", points.len());
        Ok(())
    }
}

/// Decorative sparkline in `#liveChart`, regenerated on a fixed period.
pub struct ChartWidget {
    state: Rc<RefCell<ChartState>>,
    refresh: TaskHandle,
}

impl ChartWidget {
    pub fn mount(
        container: Element,
        rng: Box<dyn RandomSource>,
        refresh_ms: u32,
        draw_delay_ms: u32,
    ) -> Result<Self, DomError> {
        let state = Rc::new(RefCell::new(ChartState { container, rng, draw_delay_ms, reveal: None }));
        state.borrow_mut().redraw()?;

        let tick_state = Rc::clone(&state);
        let refresh = spawn_interval(refresh_ms, move || {
            if let Err(e) = tick_state.borrow_mut().redraw() {
                log_warn!(LogComponent::Chart, "redraw failed: {}", e);
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        });

        Ok(Self { state, refresh })
    }

    pub fn stop(&self) {
        self.refresh.cancel();
        let mut state = self.state.borrow_mut();
        state.reveal.take();
        state.container.set_inner_html("");
    }
}
