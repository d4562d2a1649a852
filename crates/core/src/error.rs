use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a dream description")]
    Missing,
    #[error("please enter a detailed dream description (at least {min} characters, got {actual})")]
    TooShort { min: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsultationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}
