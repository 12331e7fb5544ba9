use askama::Template;
use monynha_contact::{ContactSubmission, NOT_PROVIDED};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc2822;

/// HTML body of the studio-inbox notification email.
///
/// All interpolated fields go through askama's HTML escaping.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactEmailTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub tel: &'a str,
    pub company: &'a str,
    pub message: &'a str,
    pub sent_at: String,
}

impl<'a> ContactEmailTemplate<'a> {
    pub fn new(submission: &'a ContactSubmission) -> Self {
        Self {
            name: &submission.name,
            email: &submission.email,
            tel: submission.tel.as_deref().unwrap_or(NOT_PROVIDED),
            company: submission.company.as_deref().unwrap_or(NOT_PROVIDED),
            message: &submission.message,
            sent_at: OffsetDateTime::now_utc()
                .format(&Rfc2822)
                .unwrap_or_default(),
        }
    }
}
