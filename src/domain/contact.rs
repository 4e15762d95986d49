// src/domain/contact.rs
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use url::form_urlencoded;

pub const THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Decode an `application/x-www-form-urlencoded` body.
    /// Name, email and message are required, the same fields the form marks
    /// `required`. Nothing else is checked.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, ServerError> {
        let mut form = ContactForm::default();

        for (key, value) in form_urlencoded::parse(body) {
            let value = value.trim().to_string();
            match key.as_ref() {
                "name" => form.name = value,
                "email" => form.email = value,
                "phone" if !value.is_empty() => form.phone = Some(value),
                "message" => form.message = value,
                _ => {}
            }
        }

        for (field, value) in [
            ("name", &form.name),
            ("email", &form.email),
            ("message", &form.message),
        ] {
            if value.is_empty() {
                return Err(ServerError::BadRequest(format!("missing required field: {field}")));
            }
        }

        Ok(form)
    }
}

/// What the visitor is told after submitting. `delivered` is always false:
/// the message is acknowledged locally and never forwarded anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub name: String,
    pub message: &'static str,
    pub delivered: bool,
    pub received_at: DateTime<Utc>,
}

/// Accepts a contact form. There is no backend behind it.
pub fn acknowledge(form: &ContactForm, now: DateTime<Utc>) -> Acknowledgment {
    tracing::info!(
        has_phone = form.phone.is_some(),
        message_len = form.message.len(),
        "contact form acknowledged locally, not delivered"
    );

    Acknowledgment {
        name: form.name.clone(),
        message: THANK_YOU,
        delivered: false,
        received_at: now,
    }
}
