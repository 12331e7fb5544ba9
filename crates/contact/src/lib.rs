mod submission;

pub use submission::{ContactSubmission, ValidateError};

/// Display default for optional submission fields, applied at render time.
pub const NOT_PROVIDED: &str = "Not provided";
