use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type. A missing DOM anchor is never an error: the feature is
/// simply not present on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Domain(DomainError),
    Application(ApplicationError),
    Infrastructure(InfrastructureError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    Validation(ValidationError),
}

/// Form validation failures; each one maps to a message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingRequiredFields(Vec<&'static str>),
    EmptyEmail,
    MalformedEmail(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationError {
    Configuration(ConfigurationError),
    AlreadyStarted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    InvalidJson(String),
    InvalidTiming { field: &'static str, value: u32 },
    InvalidMetric { id: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InfrastructureError {
    Dom(DomError),
    Rendering(RenderingError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomError {
    WindowUnavailable,
    DocumentUnavailable,
    ElementCreationFailed(String),
    UnexpectedElementType { selector: String, expected: &'static str },
    JsCallFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderingError {
    ContextUnavailable(String),
    ObserverCreationFailed(String),
}

impl ValidationError {
    /// Text surfaced to the visitor.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredFields(_) => "Please fill in all required fields.",
            ValidationError::EmptyEmail | ValidationError::MalformedEmail(_) => {
                "Please enter a valid email address."
            }
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Domain(e) => write!(f, "Domain Error: {}", e),
            AppError::Application(e) => write!(f, "Application Error: {}", e),
            AppError::Infrastructure(e) => write!(f, "Infrastructure Error: {}", e),
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(e) => write!(f, "Validation: {}", e),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValidationError::MissingRequiredFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            ValidationError::EmptyEmail => write!(f, "email is empty"),
            ValidationError::MalformedEmail(email) => write!(f, "malformed email: {}", email),
        }
    }
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ApplicationError::Configuration(e) => write!(f, "Configuration: {}", e),
            ApplicationError::AlreadyStarted => write!(f, "site controller already started"),
        }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigurationError::InvalidJson(msg) => write!(f, "invalid page config JSON: {}", msg),
            ConfigurationError::InvalidTiming { field, value } => {
                write!(f, "timing `{}` must be positive, got {}", field, value)
            }
            ConfigurationError::InvalidMetric { id, reason } => {
                write!(f, "metric `{}` rejected: {}", id, reason)
            }
        }
    }
}

impl Display for InfrastructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InfrastructureError::Dom(e) => write!(f, "DOM: {}", e),
            InfrastructureError::Rendering(e) => write!(f, "Rendering: {}", e),
        }
    }
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomError::WindowUnavailable => write!(f, "window is not available"),
            DomError::DocumentUnavailable => write!(f, "document is not available"),
            DomError::ElementCreationFailed(msg) => write!(f, "failed to create {}", msg),
            DomError::UnexpectedElementType { selector, expected } => {
                write!(f, "`{}` is not a {}", selector, expected)
            }
            DomError::JsCallFailed(msg) => write!(f, "JS call failed: {}", msg),
        }
    }
}

impl Display for RenderingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RenderingError::ContextUnavailable(what) => write!(f, "rendering context unavailable: {}", what),
            RenderingError::ObserverCreationFailed(msg) => {
                write!(f, "IntersectionObserver creation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for DomError {}
impl std::error::Error for RenderingError {}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        AppError::Domain(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(error))
    }
}

impl From<ApplicationError> for AppError {
    fn from(error: ApplicationError) -> Self {
        AppError::Application(error)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(error: ConfigurationError) -> Self {
        AppError::Application(ApplicationError::Configuration(error))
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<DomError> for AppError {
    fn from(error: DomError) -> Self {
        AppError::Infrastructure(InfrastructureError::Dom(error))
    }
}

impl From<RenderingError> for AppError {
    fn from(error: RenderingError) -> Self {
        AppError::Infrastructure(InfrastructureError::Rendering(error))
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
