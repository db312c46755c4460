use crate::helpers::{spawn_app, OWNER_EMAIL};
use portfolio::domain::contact::models::submission::ContactRequest;
use portfolio::form_client::{ContactForm, FormField, FormStatus};
use portfolio::inbound::http::{ContactResponse, MESSAGE_SENT};
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

const DELIVERY_FAILED: &str = "Failed to send message. Please try again or email me directly.";

/// Matches provider requests addressed to the given recipient.
struct RecipientMatcher(&'static str);

impl wiremock::Match for RecipientMatcher {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<serde_json::Value>(&request.body)
            .map(|body| body["to"] == json!([self.0]))
            .unwrap_or(false)
    }
}

fn jane() -> serde_json::Value {
    json!({ "name": "Jane", "email": "jane@x.com", "message": "Hi" })
}

#[tokio::test]
async fn contact_returns_a_200_for_valid_submission() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&jane()).await;

    assert_eq!(200, response.status().as_u16());
    let body: ContactResponse = response.json().await.unwrap();
    assert_eq!(body, ContactResponse::success(MESSAGE_SENT));
    assert_eq!(
        body.message,
        "Message sent successfully! I'll get back to you soon."
    );
}

#[tokio::test]
async fn contact_notifies_the_owner_then_acknowledges_the_submitter() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    app.post_contact(&jane()).await;

    let bodies = app.email_request_bodies().await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["to"], json!([OWNER_EMAIL]));
    assert_eq!(bodies[0]["subject"], "New Portfolio Contact: Jane");
    assert_eq!(bodies[1]["to"], json!(["jane@x.com"]));
    assert!(bodies[1]["subject"]
        .as_str()
        .unwrap()
        .starts_with("Thanks for reaching out!"));
}

#[tokio::test]
async fn contact_accepts_addresses_outside_strict_dns_rules() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&app.email_server)
        .await;

    for email in ["josé@example.com", "jane@my_host.com"] {
        let response = app
            .post_contact(&json!({ "name": "Jane", "email": email, "message": "Hi" }))
            .await;

        assert_eq!(
            200,
            response.status().as_u16(),
            "The API rejected the well-formed email {}.",
            email
        );
    }
}

#[tokio::test]
async fn contact_returns_a_400_when_a_field_is_missing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (
            json!({ "name": "", "email": "jane@x.com", "message": "Hi" }),
            "empty name",
        ),
        (
            json!({ "name": "Jane", "email": "", "message": "Hi" }),
            "empty email",
        ),
        (
            json!({ "name": "Jane", "email": "jane@x.com", "message": "   " }),
            "blank message",
        ),
        (
            json!({ "email": "jane@x.com", "message": "Hi" }),
            "missing name",
        ),
        (
            json!({ "name": "Jane", "email": "jane@x.com", "message": null }),
            "null message",
        ),
        (json!({}), "missing everything"),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description
        );
        let body: ContactResponse = response.json().await.unwrap();
        assert_eq!(
            body,
            ContactResponse::failure("All fields are required"),
            "Unexpected body for a payload with {}.",
            description
        );
    }
}

#[tokio::test]
async fn contact_returns_a_400_when_the_email_is_malformed() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for email in ["jane", "jane@x", "@x.com", "jane@.com", "jane doe@x.com"] {
        let response = app
            .post_contact(&json!({ "name": "Jane", "email": email, "message": "Hi" }))
            .await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API accepted the malformed email {}.",
            email
        );
        let body: ContactResponse = response.json().await.unwrap();
        assert_eq!(body, ContactResponse::failure("Invalid email format"));
    }
}

#[tokio::test]
async fn contact_returns_a_400_for_a_body_that_is_not_a_submission() {
    let app = spawn_app().await;

    for raw in ["not json", r#"{"name": 42, "email": "jane@x.com", "message": "Hi"}"#] {
        let response = app.post_contact_raw(raw).await;

        assert_eq!(400, response.status().as_u16());
        let body: ContactResponse = response.json().await.unwrap();
        assert!(!body.success);
    }
}

#[tokio::test]
async fn contact_returns_a_500_and_skips_acknowledgment_if_notification_fails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&jane()).await;

    assert_eq!(500, response.status().as_u16());
    let body: ContactResponse = response.json().await.unwrap();
    assert_eq!(body, ContactResponse::failure(DELIVERY_FAILED));
}

#[tokio::test]
async fn contact_returns_a_500_if_only_the_acknowledgment_fails() {
    let app = spawn_app().await;

    Mock::given(RecipientMatcher(OWNER_EMAIL))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(RecipientMatcher("jane@x.com"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&jane()).await;

    assert_eq!(500, response.status().as_u16());
    let body: ContactResponse = response.json().await.unwrap();
    assert_eq!(body, ContactResponse::failure(DELIVERY_FAILED));
}

#[tokio::test]
async fn contact_form_resets_after_a_successful_submission() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let mut form = ContactForm::new();
    form.update(FormField::Name, "Jane");
    form.update(FormField::Email, "jane@x.com");
    form.update(FormField::Message, "Hi");

    let status = form.submit(&app.form_client).await;

    assert_eq!(status, FormStatus::Success);
    assert_eq!(form.status(), FormStatus::Success);
    assert_eq!(form.fields(), &ContactRequest::default());
    assert_eq!(form.last_message(), Some(MESSAGE_SENT));
}

#[tokio::test]
async fn contact_form_keeps_its_fields_when_delivery_fails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.email_server)
        .await;

    let mut form = ContactForm::new();
    form.update(FormField::Name, "Jane");
    form.update(FormField::Email, "jane@x.com");
    form.update(FormField::Message, "Hi");

    let status = form.submit(&app.form_client).await;

    assert_eq!(status, FormStatus::Error);
    assert_eq!(form.fields(), &ContactRequest::new("Jane", "jane@x.com", "Hi"));
    assert_eq!(form.last_message(), Some(DELIVERY_FAILED));
}
