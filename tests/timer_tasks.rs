#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use vip_club_site_wasm::infrastructure::timers::{Debouncer, spawn_delay, spawn_interval};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn interval_stops_when_callback_breaks() {
    let ticks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&ticks);
    let _handle = spawn_interval(10, move || {
        counter.set(counter.get() + 1);
        if counter.get() == 3 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    });
    sleep(Duration::from_millis(150)).await;
    assert_eq!(ticks.get(), 3);
}

#[wasm_bindgen_test(async)]
async fn dropped_delay_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    let handle = spawn_delay(20, move || flag.set(true));
    drop(handle);
    sleep(Duration::from_millis(80)).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test(async)]
async fn cancelled_interval_stops_ticking() {
    let ticks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&ticks);
    let handle = spawn_interval(10, move || {
        counter.set(counter.get() + 1);
        ControlFlow::Continue(())
    });
    sleep(Duration::from_millis(55)).await;
    handle.cancel();
    assert!(handle.is_cancelled());
    let seen = ticks.get();
    sleep(Duration::from_millis(60)).await;
    assert_eq!(ticks.get(), seen);
}

#[wasm_bindgen_test(async)]
async fn debouncer_runs_only_the_last_trigger() {
    let runs = Rc::new(Cell::new(0));
    let debouncer = Debouncer::new();
    for _ in 0..5 {
        let runs = Rc::clone(&runs);
        debouncer.trigger(30, move || runs.set(runs.get() + 1));
    }
    sleep(Duration::from_millis(100)).await;
    assert_eq!(runs.get(), 1);
}
