use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node};

use crate::domain::errors::RenderingError;
use crate::domain::logging::LogComponent;
use crate::domain::viewport::{ObservationId, Threshold, ViewportRegistry};
use crate::log_trace;

type EnterCallback = Box<dyn FnOnce(Element)>;

struct Watch {
    id: ObservationId,
    element: Element,
    on_enter: EnterCallback,
}

struct ObserverState {
    threshold: Threshold,
    registry: ViewportRegistry,
    watches: Vec<Watch>,
}

/// One-shot `IntersectionObserver` wrapper: each observed element fires its
/// callback once and is then unobserved.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    state: Rc<RefCell<ObserverState>>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn new(threshold: f64) -> Result<Self, RenderingError> {
        let threshold = Threshold::new(threshold);
        let state = Rc::new(RefCell::new(ObserverState {
            threshold,
            registry: ViewportRegistry::new(),
            watches: Vec::new(),
        }));

        let callback_state = Rc::clone(&state);
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let fired = Self::collect_fired(&callback_state, &entries, &observer);
            // run outside the borrow; callbacks may observe more elements
            for watch in fired {
                (watch.on_enter)(watch.element);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.value()));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| RenderingError::ObserverCreationFailed(format!("{:?}", e)))?;

        Ok(Self { observer, state, _callback: callback })
    }

    fn collect_fired(
        state: &Rc<RefCell<ObserverState>>,
        entries: &js_sys::Array,
        observer: &IntersectionObserver,
    ) -> Vec<Watch> {
        let mut state = state.borrow_mut();
        let mut fired = Vec::new();

        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let target_node: &Node = target.as_ref();
            let Some(index) = state
                .watches
                .iter()
                .position(|watch| watch.element.is_same_node(Some(target_node)))
            else {
                continue;
            };

            let id = state.watches[index].id;
            if state.registry.report(id, entry.is_intersecting(), entry.intersection_ratio()) {
                let watch = state.watches.remove(index);
                observer.unobserve(&watch.element);
                log_trace!(
                    LogComponent::Viewport,
                    "{:?} entered at ratio {:.2} (threshold {:.2})",
                    id,
                    entry.intersection_ratio(),
                    state.threshold.value()
                );
                fired.push(watch);
            }
        }
        fired
    }

    pub fn observe(&self, element: Element, on_enter: impl FnOnce(Element) + 'static) -> ObservationId {
        let mut state = self.state.borrow_mut();
        let threshold = state.threshold;
        let id = state.registry.register(threshold);
        self.observer.observe(&element);
        state.watches.push(Watch { id, element, on_enter: Box::new(on_enter) });
        id
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().registry.len()
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
        let mut state = self.state.borrow_mut();
        state.watches.clear();
        state.registry = ViewportRegistry::new();
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
