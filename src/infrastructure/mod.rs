//! Browser adapters: DOM lookups, listeners, timers and the widget bindings.

pub mod dom;
pub mod observer;
pub mod rendering;
pub mod services;
pub mod timers;
pub mod ui;

pub use observer::ViewportObserver;
pub use services::{BrowserRandom, BrowserTimeProvider, ConsoleLogger};
