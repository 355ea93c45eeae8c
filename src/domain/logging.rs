use std::sync::OnceLock;

use derive_more::Display;

/// Severity, padded to five columns so console lines stay aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

/// The page part a log line is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    /// Module start and the controller that owns every widget.
    #[display(fmt = "page")]
    Page,
    /// Calls arriving through the JS exports.
    #[display(fmt = "api")]
    Api,
    #[display(fmt = "counters")]
    Counters,
    #[display(fmt = "ticker")]
    Ticker,
    #[display(fmt = "chart")]
    Chart,
    #[display(fmt = "starfield")]
    Starfield,
    /// Intersection tracking and the reveal-on-scroll cards.
    #[display(fmt = "viewport")]
    Viewport,
    /// Header state, section dots and in-page anchor jumps.
    #[display(fmt = "navigation")]
    Navigation,
    #[display(fmt = "menu")]
    Menu,
    #[display(fmt = "notifications")]
    Notifications,
    #[display(fmt = "forms")]
    Forms,
    /// Loading screen and login dialog.
    #[display(fmt = "overlays")]
    Overlays,
    /// Tab strips plus blog and event filters.
    #[display(fmt = "listing")]
    Listing,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub metadata: Option<String>,
}

/// Clock abstraction so domain code never touches `js_sys::Date` directly.
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// A sink for rendered entries.
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Lets a sink skip formatting for levels it would drop anyway.
    fn accepts(&self, _level: LogLevel) -> bool {
        true
    }
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.into(),
            metadata: None,
        }
    }

    /// Attaches a compact JSON blob printed after the message.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// `[time] LEVEL component | message | metadata`
    pub fn render(&self) -> String {
        let mut line = format!(
            "[{}] {} {} | {}",
            get_time_provider().format_timestamp(self.timestamp),
            self.level,
            self.component,
            self.message
        );
        if let Some(metadata) = &self.metadata {
            line.push_str(" | ");
            line.push_str(metadata);
        }
        line
    }
}

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Install the process-wide logger. Later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER
        .get()
        .map(|provider| provider.as_ref())
        .unwrap_or(&BasicTimeProvider)
}

/// Sends one line to the installed logger. Used by the `log_*!` macros.
pub fn emit(level: LogLevel, component: LogComponent, message: impl Into<String>) {
    let logger = get_logger();
    if logger.accepts(level) {
        logger.log(LogEntry::new(level, component, message));
    }
}

pub fn emit_with_metadata(
    level: LogLevel,
    component: LogComponent,
    message: impl Into<String>,
    metadata: impl Into<String>,
) {
    let logger = get_logger();
    if logger.accepts(level) {
        logger.log(LogEntry::new(level, component, message).with_metadata(metadata));
    }
}

struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}

    fn accepts(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Tick counter used until the browser clock is installed, and in native tests.
struct BasicTimeProvider;

impl TimeProvider for BasicTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TICKS: AtomicU64 = AtomicU64::new(0);
        TICKS.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("{:06}", timestamp)
    }
}

/// Trace, debug and info compile out of release builds. Warn and error always ship.
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Trace, $component, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Debug, $component, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Info, $component, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Warn, $component, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Error, $component, format!($($arg)*))
    };
}
