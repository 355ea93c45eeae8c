//! Timer tasks on the browser event loop.
//!
//! Every periodic or delayed callback is an `Abortable` future spawned with
//! `spawn_local`; the returned [`TaskHandle`] aborts it when dropped, so owners
//! release their timers just by dropping handles.

use std::cell::RefCell;
use std::ops::ControlFlow;

use futures::StreamExt;
use futures::future::{AbortHandle, Abortable};
use gloo_timers::callback::Timeout;
use gloo_timers::future::{IntervalStream, TimeoutFuture};
use wasm_bindgen_futures::spawn_local;

#[derive(Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Call `on_tick` every `period_ms` until it breaks or the handle goes away.
pub fn spawn_interval<F>(period_ms: u32, mut on_tick: F) -> TaskHandle
where
    F: FnMut() -> ControlFlow<()> + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    let ticker = async move {
        let mut ticks = IntervalStream::new(period_ms);
        while ticks.next().await.is_some() {
            if on_tick().is_break() {
                break;
            }
        }
    };
    spawn_local(async move {
        let _ = Abortable::new(ticker, registration).await;
    });
    TaskHandle { abort }
}

/// Run `f` once after `delay_ms` unless the handle is dropped first.
pub fn spawn_delay<F>(delay_ms: u32, f: F) -> TaskHandle
where
    F: FnOnce() + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    let delayed = async move {
        TimeoutFuture::new(delay_ms).await;
        f();
    };
    spawn_local(async move {
        let _ = Abortable::new(delayed, registration).await;
    });
    TaskHandle { abort }
}

/// Restart-on-call timeout used for resize handling.
#[derive(Default)]
pub struct Debouncer {
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger<F>(&self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        // dropping the previous Timeout clears it
        *self.pending.borrow_mut() = Some(Timeout::new(delay_ms, f));
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
