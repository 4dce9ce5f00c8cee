mod client;
mod error;

pub use client::{
    API_SECRET_HEADER, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TranslationClient, check_status,
    validate_input,
};
pub use error::TranslateError;
