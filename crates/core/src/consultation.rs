use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::error::ConsultationError;
use crate::models::{ConsultationReceipt, ConsultationRequest};

pub const CONSULTATION_FEE_CENTS: u32 = 4_999;
pub const CONSULTATION_CURRENCY: &str = "USD";
pub const RESPONSE_WINDOW: &str = "within 1 hour";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

pub fn validate_consultation(request: &ConsultationRequest) -> Result<(), ConsultationError> {
    let required = [
        ("name", &request.name),
        ("email", &request.email),
        ("phone", &request.phone),
        ("dream description", &request.dream_description),
        ("preferred time", &request.preferred_time),
    ];

    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ConsultationError::MissingField(*field));
    }

    let email = request.email.trim();
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ConsultationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

pub fn issue_receipt(request: &ConsultationRequest, at: DateTime<Utc>) -> ConsultationReceipt {
    ConsultationReceipt {
        reference: Uuid::new_v4(),
        submitted_at: at,
        client_name: request.name.trim().to_string(),
        preferred_time: request.preferred_time.trim().to_string(),
        fee_cents: CONSULTATION_FEE_CENTS,
        currency: CONSULTATION_CURRENCY.to_string(),
        response_window: RESPONSE_WINDOW.to_string(),
    }
}

pub fn format_fee(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
