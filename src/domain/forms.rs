use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::errors::ValidationError;

pub const SIMULATED_SEND_MS: u32 = 1500;
pub const NEWSLETTER_THANKS: &str = "Thank you for subscribing to our newsletter!";
pub const SENDING_LABEL: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";

static INTEREST_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("vip-pro", "VIP Pro Trader Program"),
        ("vip-elite", "VIP Elite Program"),
        ("vip-master", "Master Class Program"),
        ("partnership", "Business Partnership"),
        ("general", "General Inquiry"),
    ])
});

pub fn interest_label(value: &str) -> &'static str {
    INTEREST_LABELS.get(value).copied().unwrap_or("your selected program")
}

/// Raw contact form values as read from the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub interest: String,
}

/// A contact form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub interest: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactInquiry, ValidationError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("interest", &self.interest),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingRequiredFields(missing));
        }

        Ok(ContactInquiry {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            interest: self.interest.trim().to_string(),
        })
    }
}

impl ContactInquiry {
    pub fn confirmation(&self) -> String {
        format!(
            "Thank you {}! Your inquiry about {} has been received. We'll contact you at {} within 24 hours.",
            self.name,
            interest_label(&self.interest),
            self.email
        )
    }
}

/// Newsletter sign-up: non-empty and containing `@`, nothing stricter.
pub fn validate_newsletter_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !email.contains('@') {
        return Err(ValidationError::MalformedEmail(email.to_string()));
    }
    Ok(email.to_string())
}
