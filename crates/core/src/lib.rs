pub mod analyzer;
pub mod catalog;
pub mod consultation;
pub mod error;
pub mod models;
pub mod religion;
pub mod rules;

pub use analyzer::{analyze_dream, classify_validated, validate_dream_text, MIN_DREAM_CHARS};
pub use catalog::{dream_meanings, search_meanings};
pub use consultation::{format_fee, issue_receipt, validate_consultation};
pub use error::{ConsultationError, ValidationError};
pub use models::*;
pub use religion::extract_religious_interpretations;
