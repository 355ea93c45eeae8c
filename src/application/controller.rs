use std::cell::Cell;
use std::rc::Rc;

use crate::application::config::PageConfig;
use crate::domain::counters::{CounterPhase, MetricTarget, StartOutcome};
use crate::domain::errors::{AppResult, ApplicationError};
use crate::domain::logging::{LogComponent, LogLevel, emit_with_metadata};
use crate::domain::notifications::{NotificationId, Severity};
use crate::domain::random::{RandomSource, SeededRandom};
use crate::infrastructure::dom;
use crate::infrastructure::rendering::{StarfieldContext, read_device_hints};
use crate::infrastructure::services::BrowserRandom;
use crate::infrastructure::ui::{
    AnchorScrollBinding, ChartWidget, ContactFormBinding, CounterDriver, CtaBinding, ListingBinding, LoadingOverlay,
    LoginModalBinding, MenuBinding, NewsletterBinding, NotificationCenter, RevealBinding, RevealPlan, ScrollBinding,
    TabStrip, TickerWidget, timeframe_tabs,
};
use crate::{log_debug, log_info, log_warn};

thread_local! {
    static CONTROLLER_LIVE: Cell<bool> = const { Cell::new(false) };
}

/// Independent streams so that one widget's draws never shift another's.
#[derive(Debug, Clone, Copy)]
enum RandomStream {
    Ticker = 1,
    Chart = 2,
    Starfield = 3,
}

fn random_source(seed: Option<u64>, stream: RandomStream) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed.wrapping_add(stream as u64))),
        None => Box::new(BrowserRandom),
    }
}

fn skipped(feature: &str) {
    log_debug!(LogComponent::Page, "{}: anchor missing, skipped", feature);
}

/// Everything one page started. Dropping it (or calling [`dispose`]) stops
/// every timer, detaches every listener and removes generated markup.
///
/// [`dispose`]: SiteController::dispose
pub struct SiteController {
    config: PageConfig,
    notifications: Rc<NotificationCenter>,
    counters: Rc<CounterDriver>,
    ticker: Option<TickerWidget>,
    chart: Option<ChartWidget>,
    starfield: Option<StarfieldContext>,
    menu: Option<Rc<MenuBinding>>,
    scroll: Option<ScrollBinding>,
    reveal: Option<RevealBinding>,
    contact: Option<ContactFormBinding>,
    newsletter: Option<NewsletterBinding>,
    loading: Option<LoadingOverlay>,
    anchors: Option<AnchorScrollBinding>,
    cta: Option<CtaBinding>,
    login: Option<LoginModalBinding>,
    timeframes: Option<TabStrip>,
    blog: Option<ListingBinding>,
    events: Option<ListingBinding>,
    disposed: bool,
}

impl SiteController {
    pub fn start(config: PageConfig) -> AppResult<Self> {
        config.validate().map_err(ApplicationError::Configuration)?;
        if CONTROLLER_LIVE.with(|live| live.replace(true)) {
            return Err(ApplicationError::AlreadyStarted.into());
        }

        let features = config.features;
        let timing = config.timing;
        let notifications = NotificationCenter::new(timing.notification_lifetime_ms);
        let counters = Rc::new(CounterDriver::new());

        let mut controller = Self {
            notifications: Rc::clone(&notifications),
            counters: Rc::clone(&counters),
            ticker: None,
            chart: None,
            starfield: None,
            menu: None,
            scroll: None,
            reveal: None,
            contact: None,
            newsletter: None,
            loading: None,
            anchors: None,
            cta: None,
            login: None,
            timeframes: None,
            blog: None,
            events: None,
            disposed: false,
            config,
        };

        if features.loading_overlay {
            controller.loading = LoadingOverlay::schedule(timing.loading_hide_ms);
            if controller.loading.is_none() {
                skipped("loading overlay");
            }
        }

        if features.starfield {
            match dom::element_by_id("space-container") {
                Some(container) => {
                    let rng = random_source(controller.config.seed, RandomStream::Starfield);
                    match StarfieldContext::mount(container, &read_device_hints(), rng, timing.resize_debounce_ms) {
                        Ok(starfield) => controller.starfield = Some(starfield),
                        Err(e) => {
                            log_warn!(LogComponent::Page, "starfield: {}", e);
                        }
                    }
                }
                None => skipped("starfield"),
            }
        }

        if features.mobile_menu {
            controller.menu = MenuBinding::attach(timing.resize_debounce_ms);
            if controller.menu.is_none() {
                skipped("mobile menu");
            }
        }

        if features.section_nav || features.header_scroll {
            controller.scroll =
                Some(ScrollBinding::attach(features.section_nav, features.header_scroll, controller.menu.clone()));
        }

        if features.reveal_cards || features.hero_counters || features.statistics_counters {
            let plan = RevealPlan {
                cards: features.reveal_cards,
                hero_metrics: features.hero_counters.then(|| controller.config.hero_metrics.clone()),
                statistics_metrics: features
                    .statistics_counters
                    .then(|| controller.config.statistics_metrics.clone()),
            };
            match RevealBinding::attach(plan, Rc::clone(&counters)) {
                Ok(reveal) => controller.reveal = Some(reveal),
                Err(e) => {
                    log_warn!(LogComponent::Page, "reveal: {}", e);
                }
            }
        }

        if features.ticker {
            match dom::html_element_by_id("forexTicker") {
                Some(container) => {
                    let rng = random_source(controller.config.seed, RandomStream::Ticker);
                    controller.ticker = Some(TickerWidget::mount(
                        container,
                        &controller.config.instruments,
                        timing.ticker_refresh_ms,
                        rng,
                    ));
                }
                None => skipped("ticker"),
            }
        }

        if features.chart {
            match dom::element_by_id("liveChart") {
                Some(container) => {
                    let rng = random_source(controller.config.seed, RandomStream::Chart);
                    match ChartWidget::mount(container, rng, timing.chart_refresh_ms, timing.chart_draw_delay_ms) {
                        Ok(chart) => controller.chart = Some(chart),
                        Err(e) => {
                            log_warn!(LogComponent::Page, "chart: {}", e);
                        }
                    }
                }
                None => skipped("chart"),
            }
        }

        if features.contact_form {
            controller.contact = ContactFormBinding::attach(Rc::clone(&notifications), timing.form_send_delay_ms);
            if controller.contact.is_none() {
                skipped("contact form");
            }
        }

        if features.newsletter {
            controller.newsletter = NewsletterBinding::attach(Rc::clone(&notifications));
            if controller.newsletter.is_none() {
                skipped("newsletter");
            }
        }

        if features.anchor_scroll {
            controller.anchors = AnchorScrollBinding::attach();
            if controller.anchors.is_none() {
                skipped("anchor scrolling");
            }
        }

        if features.cta_contact {
            controller.cta = CtaBinding::attach();
            if controller.cta.is_none() {
                skipped("call to action");
            }
        }

        if features.login_modal {
            controller.login = LoginModalBinding::attach();
            if controller.login.is_none() {
                skipped("login modal");
            }
        }

        if features.timeframe_tabs {
            controller.timeframes = timeframe_tabs();
            if controller.timeframes.is_none() {
                skipped("timeframe tabs");
            }
        }

        if features.blog_filters {
            controller.blog = ListingBinding::attach_blog();
            if controller.blog.is_none() {
                skipped("blog filters");
            }
        }

        if features.event_filters {
            controller.events = ListingBinding::attach_events();
            if controller.events.is_none() {
                skipped("event filters");
            }
        }

        emit_with_metadata(
            LogLevel::Info,
            LogComponent::Page,
            "🚀 page started",
            serde_json::to_string(&features).unwrap_or_default(),
        );
        Ok(controller)
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn notify(&self, message: &str, severity: Severity) -> NotificationId {
        self.notifications.notify(message, severity)
    }

    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    /// Start a count-up on demand. `Ok(None)` when the element is not on the page.
    pub fn animate_counter(&self, target: MetricTarget) -> AppResult<Option<StartOutcome>> {
        target.validate().map_err(ApplicationError::Configuration)?;
        Ok(self.counters.animate(target))
    }

    pub fn counter_phase(&self, id: &str) -> Option<CounterPhase> {
        self.counters.phase(id)
    }

    pub fn current_section(&self) -> Option<String> {
        self.scroll.as_ref().and_then(ScrollBinding::current_section)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|menu| menu.is_open())
    }

    pub fn is_login_open(&self) -> bool {
        self.login.as_ref().is_some_and(LoginModalBinding::is_open)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release every timer, listener and rendering context. Safe to call twice.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if let Some(reveal) = self.reveal.take() {
            reveal.detach();
        }
        self.counters.dispose();
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        if let Some(chart) = self.chart.take() {
            chart.stop();
        }
        if let Some(mut starfield) = self.starfield.take() {
            starfield.dispose();
        }
        if let Some(scroll) = self.scroll.take() {
            scroll.detach();
        }
        if let Some(menu) = self.menu.take() {
            menu.detach();
        }
        if let Some(contact) = self.contact.take() {
            contact.detach();
        }
        self.newsletter.take();
        if let Some(loading) = self.loading.take() {
            loading.cancel();
        }
        self.anchors.take();
        self.cta.take();
        if let Some(login) = self.login.take() {
            login.detach();
        }
        self.timeframes.take();
        for listing in [self.blog.take(), self.events.take()].into_iter().flatten() {
            listing.detach();
        }
        self.notifications.clear();

        CONTROLLER_LIVE.with(|live| live.set(false));
        log_info!(LogComponent::Page, "page controller disposed");
    }
}

impl Drop for SiteController {
    fn drop(&mut self) {
        self.dispose();
    }
}
