mod service;
mod template;

pub use service::{EmailConfig, EmailService, RelayError};
pub use template::ContactEmailTemplate;
