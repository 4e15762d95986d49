use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, post_form, test_app};

const COMPLETE_FORM: &str =
    "name=Grace+Hopper&email=grace%40example.com&phone=&message=Looking+for+a+loft";

#[test]
fn htmx_submission_returns_acknowledgment_partial() {
    let app = test_app();

    let resp = handle(post_form("/contact", COMPLETE_FORM, true), &app)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("id=\"contact-panel\""));
    assert!(body.contains("Thank you for your message!"));
    assert!(body.contains("Grace Hopper"));
    assert!(body.contains("has not been sent anywhere"));
    assert!(body.contains("data-delivered=\"false\""));

    // A fresh form comes back with the notice.
    assert!(body.contains("data-testid=\"contact-submit\""));
    assert!(!body.contains("<html"));
}

#[test]
fn plain_submission_renders_full_page_with_notice() {
    let app = test_app();

    let resp = handle(post_form("/contact", COMPLETE_FORM, false), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("data-testid=\"contact-ack\""));
    assert!(body.contains("showcase-section"));
}

#[test]
fn missing_message_is_rejected() {
    let app = test_app();

    let form = "name=Grace&email=grace%40example.com";
    match handle(post_form("/contact", form, true), &app) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("message")),
        other => panic!("expected BadRequest, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn non_form_content_type_is_rejected() {
    let app = test_app();

    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/contact")
        .header("Content-Type", "application/json")
        .body(astra::Body::from(r#"{"name":"x"}"#))
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}

#[test]
fn oversized_body_is_rejected_whatever_the_field_order() {
    let app = test_app();
    let long_message = "a".repeat(70 * 1024);

    for form in [
        format!("message={long_message}&name=Grace&email=grace%40example.com"),
        format!("name=Grace&email=grace%40example.com&message={long_message}"),
    ] {
        match handle(post_form("/contact", &form, true), &app) {
            Err(ServerError::BadRequest(msg)) => assert!(msg.contains("too large"), "{msg}"),
            other => panic!("expected BadRequest, got {:?}", other.map(|r| r.status())),
        }
    }
}

#[test]
fn body_exactly_at_limit_is_accepted() {
    let app = test_app();
    let prefix = "name=Grace&email=grace%40example.com&message=";
    let form = format!("{prefix}{}", "a".repeat(64 * 1024 - prefix.len()));
    assert_eq!(form.len(), 64 * 1024);

    let resp = handle(post_form("/contact", &form, true), &app).unwrap();
    assert_eq!(resp.status(), 200);
}
