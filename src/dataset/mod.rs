//! Dataset module - loading, normalization, matching and export

pub mod export;
pub mod loader;
pub mod matcher;
pub mod sanitize;

pub use export::*;
pub use loader::*;
pub use matcher::*;
pub use sanitize::*;

/// Columns every record must carry, in canonical order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "candidate_name",
    "job_title",
    "cv_text",
    "job_offer_id",
    "candidate_id",
];

/// Column holding the free-text CV content.
pub const CV_TEXT_FIELD: &str = "cv_text";
