use std::cell::RefCell;
use std::ops::ControlFlow;

use leptos::*;
use web_sys::HtmlElement;

use crate::domain::logging::LogComponent;
use crate::domain::random::RandomSource;
use crate::domain::ticker::{InstrumentQuote, TickerBoard, TickerRow};
use crate::infrastructure::timers::{TaskHandle, spawn_interval};
use crate::log_info;

#[component]
pub fn TickerStrip(rows: RwSignal<Vec<TickerRow>>) -> impl IntoView {
    // the strip holds every pair twice, so rows are positional rather than keyed
    move || {
        rows.with(|rows| {
            rows.iter()
                .map(|row| {
                    view! {
                        <div class="ticker-item">
                            <span class="ticker-pair">{row.pair_label.clone()}</span>
                            <span class="ticker-price">{row.price_text().to_string()}</span>
                            <span class=row.change_class()>{row.delta_text().to_string()}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    }
}

/// Scrolling price strip: a [`TickerBoard`] mirrored into a signal, perturbed on a timer.
pub struct TickerWidget {
    rows: RwSignal<Vec<TickerRow>>,
    refresh: TaskHandle,
}

impl TickerWidget {
    pub fn mount(
        container: HtmlElement,
        instruments: &[InstrumentQuote],
        refresh_ms: u32,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let board = TickerBoard::initialize(instruments);
        let rows = create_rw_signal(board.rows().to_vec());

        container.set_inner_html("");
        mount_to(container, move || view! { <TickerStrip rows=rows/> });
        log_info!(
            LogComponent::Ticker,
            "📈 ticker with {} instruments",
            board.instrument_count()
        );

        let board = RefCell::new(board);
        let rng = RefCell::new(rng);
        let refresh = spawn_interval(refresh_ms, move || {
            let mut board = board.borrow_mut();
            board.tick(rng.borrow_mut().as_mut());
            rows.set(board.rows().to_vec());
            ControlFlow::Continue(())
        });

        Self { rows, refresh }
    }

    pub fn rows(&self) -> Vec<TickerRow> {
        self.rows.get_untracked()
    }

    pub fn stop(&self) {
        self.refresh.cancel();
    }
}
