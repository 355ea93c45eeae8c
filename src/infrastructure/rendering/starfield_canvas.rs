use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::domain::errors::{AppResult, RenderingError};
use crate::domain::logging::LogComponent;
use crate::domain::random::RandomSource;
use crate::domain::starfield::{
    DeviceHints, DeviceProfile, FALLBACK_DOT_COUNT, Starfield, StarfieldSettings, fallback_dots,
};
use crate::infrastructure::dom;
use crate::infrastructure::timers::Debouncer;
use crate::{log_debug, log_info};

const FALLBACK_BACKGROUND: &str = "radial-gradient(circle at center, #0a1128 0%, #050505 100%)";

/// Reads navigator hints; `deviceMemory` is not in the typed bindings so it goes through `Reflect`.
pub fn read_device_hints() -> DeviceHints {
    let Ok(window) = dom::window() else {
        return DeviceHints::default();
    };
    let navigator = window.navigator();
    let device_memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());
    let hardware_concurrency = Some(navigator.hardware_concurrency()).filter(|cores| *cores > 0.0);
    let canvas_supported = dom::document()
        .ok()
        .and_then(|doc| doc.create_element("canvas").ok())
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .and_then(|canvas| canvas.get_context("2d").ok().flatten())
        .is_some();

    DeviceHints {
        viewport_width: dom::viewport_width(),
        user_agent: navigator.user_agent().unwrap_or_default(),
        device_memory_gb,
        hardware_concurrency,
        canvas_supported,
    }
}

struct FrameLoop {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    field: RefCell<Starfield>,
    profile: Cell<DeviceProfile>,
    frame: RefCell<Option<AnimationFrame>>,
    disposed: Cell<bool>,
}

impl FrameLoop {
    fn resize_canvas(&self) {
        self.canvas.set_width(dom::viewport_width().max(1.0) as u32);
        self.canvas.set_height(dom::viewport_height().max(1.0) as u32);
    }

    fn draw(&self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let mut field = self.field.borrow_mut();
        field.advance();

        self.context.clear_rect(0.0, 0.0, width, height);
        self.context.set_global_alpha(field.settings().opacity);
        self.context.set_fill_style(&JsValue::from_str("#ffffff"));
        for star in field.frame(width, height) {
            let size = star.size.max(0.5);
            self.context.fill_rect(star.x - size / 2.0, star.y - size / 2.0, size, size);
        }
    }

    fn schedule(self: &Rc<Self>) {
        if self.disposed.get() {
            return;
        }
        let next = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            if next.disposed.get() {
                return;
            }
            next.draw();
            next.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

/// Owns every browser resource of the space background.
///
/// Nothing here is global: the page keeps one context and calls [`dispose`]
/// on teardown to stop the frame loop, drop listeners and detach the canvas.
///
/// [`dispose`]: StarfieldContext::dispose
pub struct StarfieldContext {
    container: Element,
    frame_loop: Option<Rc<FrameLoop>>,
    resize: Option<EventListener>,
    debouncer: Rc<Debouncer>,
    disposed: bool,
}

impl StarfieldContext {
    /// Animated canvas on capable devices, static dots otherwise.
    pub fn mount(
        container: Element,
        hints: &DeviceHints,
        mut rng: Box<dyn RandomSource>,
        resize_debounce_ms: u32,
    ) -> AppResult<Self> {
        let profile = hints.profile();
        let Some(settings) = StarfieldSettings::for_profile(profile) else {
            Self::mount_fallback(&container, rng.as_mut())?;
            return Ok(Self {
                container,
                frame_loop: None,
                resize: None,
                debouncer: Rc::new(Debouncer::new()),
                disposed: false,
            });
        };

        let document = dom::document()?;
        let canvas = dom::create_element(&document, "canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderingError::ContextUnavailable("canvas element".to_string()))?;
        let context = canvas
            .get_context("2d")
            .map_err(|e| RenderingError::ContextUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| RenderingError::ContextUnavailable("2d".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderingError::ContextUnavailable("2d cast".to_string()))?;
        let _ = canvas.set_attribute("style", "display:block;width:100%;height:100%");
        container
            .append_child(&canvas)
            .map_err(|e| RenderingError::ContextUnavailable(format!("appendChild: {:?}", e)))?;

        let field = Starfield::new(settings, rng.as_mut());
        log_info!(
            LogComponent::Starfield,
            "✨ {:?} starfield with {} stars",
            profile,
            field.stars().len()
        );

        let frame_loop = Rc::new(FrameLoop {
            canvas,
            context,
            field: RefCell::new(field),
            profile: Cell::new(profile),
            frame: RefCell::new(None),
            disposed: Cell::new(false),
        });
        frame_loop.resize_canvas();
        frame_loop.schedule();

        let debouncer = Rc::new(Debouncer::new());
        let resize = {
            let frame_loop = Rc::clone(&frame_loop);
            let debouncer = Rc::clone(&debouncer);
            let rng = Rc::new(RefCell::new(rng));
            dom::on_window("resize", move |_| {
                let frame_loop = Rc::clone(&frame_loop);
                let rng = Rc::clone(&rng);
                debouncer.trigger(resize_debounce_ms, move || Self::on_resize(&frame_loop, &rng));
            })
        };

        Ok(Self {
            container,
            frame_loop: Some(frame_loop),
            resize,
            debouncer,
            disposed: false,
        })
    }

    fn on_resize(frame_loop: &Rc<FrameLoop>, rng: &Rc<RefCell<Box<dyn RandomSource>>>) {
        if frame_loop.disposed.get() {
            return;
        }
        frame_loop.resize_canvas();

        let hints = DeviceHints { canvas_supported: true, ..read_device_hints() };
        // only the desktop/mobile split is re-evaluated; the fallback is decided once
        let profile = match hints.profile() {
            DeviceProfile::LowPower => frame_loop.profile.get(),
            other => other,
        };
        if profile == frame_loop.profile.get() {
            return;
        }
        if let Some(settings) = StarfieldSettings::for_profile(profile) {
            log_debug!(LogComponent::Starfield, "profile changed to {:?}", profile);
            let mut rng = rng.borrow_mut();
            *frame_loop.field.borrow_mut() = Starfield::new(settings, rng.as_mut());
            frame_loop.profile.set(profile);
        }
    }

    fn mount_fallback(container: &Element, rng: &mut dyn RandomSource) -> AppResult<()> {
        let document = dom::document()?;
        container.set_inner_html("");
        if let Some(html) = container.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("background", FALLBACK_BACKGROUND);
        }
        for dot in fallback_dots(FALLBACK_DOT_COUNT, rng) {
            let star = dom::create_element(&document, "div")?;
            dom::set_attr(&star, "style", &dot.inline_style())?;
            let _ = container.append_child(&star);
        }
        log_info!(LogComponent::Starfield, "low-power device, static starfield");
        Ok(())
    }

    pub fn is_animated(&self) -> bool {
        self.frame_loop.is_some()
    }

    pub fn profile(&self) -> Option<DeviceProfile> {
        self.frame_loop.as_ref().map(|frame_loop| frame_loop.profile.get())
    }

    /// Stop the frame loop, drop listeners and remove whatever was drawn. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.resize.take();
        self.debouncer.cancel();
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.disposed.set(true);
            frame_loop.frame.borrow_mut().take();
            frame_loop.canvas.remove();
        } else {
            self.container.set_inner_html("");
        }
    }
}

impl Drop for StarfieldContext {
    fn drop(&mut self) {
        self.dispose();
    }
}
