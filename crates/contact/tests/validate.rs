use monynha_contact::{ContactSubmission, ValidateError};
use serde_json::json;

#[test]
fn accepts_payload_with_all_required_fields() {
    let payload = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "message": "Let's build something."
    });

    let submission = ContactSubmission::from_payload(&payload).unwrap();
    assert_eq!(submission.name, "Ada Lovelace");
    assert_eq!(submission.email, "ada@example.com");
    assert_eq!(submission.message, "Let's build something.");
    assert_eq!(submission.tel, None);
    assert_eq!(submission.company, None);
}

#[test]
fn optional_fields_pass_through_verbatim() {
    let payload = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hi",
        "tel": "+351 912 345 678",
        "company": "Analytical Engines Ltd"
    });

    let submission = ContactSubmission::from_payload(&payload).unwrap();
    assert_eq!(submission.tel.as_deref(), Some("+351 912 345 678"));
    assert_eq!(submission.company.as_deref(), Some("Analytical Engines Ltd"));
}

#[test]
fn rejects_when_a_required_field_is_absent() {
    for missing in ["name", "email", "message"] {
        let mut payload = json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi"
        });
        payload.as_object_mut().unwrap().remove(missing);

        assert_eq!(
            ContactSubmission::from_payload(&payload),
            Err(ValidateError::MissingRequiredFields),
            "payload without {missing} must be rejected"
        );
    }
}

#[test]
fn rejects_when_a_required_field_is_empty() {
    for empty in ["name", "email", "message"] {
        let mut payload = json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi"
        });
        payload[empty] = json!("");

        assert_eq!(
            ContactSubmission::from_payload(&payload),
            Err(ValidateError::MissingRequiredFields),
            "payload with empty {empty} must be rejected"
        );
    }
}

#[test]
fn rejects_when_a_required_field_is_not_a_string() {
    for (field, value) in [
        ("name", json!(42)),
        ("email", json!(null)),
        ("message", json!(["hello"])),
    ] {
        let mut payload = json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi"
        });
        payload[field] = value;

        assert_eq!(
            ContactSubmission::from_payload(&payload),
            Err(ValidateError::MissingRequiredFields),
            "non-string {field} must be rejected"
        );
    }
}

#[test]
fn rejects_non_object_payloads() {
    for payload in [json!("hello"), json!(null), json!([1, 2, 3])] {
        assert_eq!(
            ContactSubmission::from_payload(&payload),
            Err(ValidateError::MissingRequiredFields)
        );
    }
}

#[test]
fn empty_optional_fields_are_treated_as_absent() {
    let payload = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hi",
        "tel": "",
        "company": ""
    });

    let submission = ContactSubmission::from_payload(&payload).unwrap();
    assert_eq!(submission.tel, None);
    assert_eq!(submission.company, None);
}

#[test]
fn no_email_format_validation_is_applied() {
    let payload = json!({
        "name": "Ada",
        "email": "not-an-address",
        "message": "Hi"
    });

    assert!(ContactSubmission::from_payload(&payload).is_ok());
}
