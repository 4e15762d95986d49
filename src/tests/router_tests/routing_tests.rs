use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};
use astra::Body;
use http::{Method, Request};

#[test]
fn stylesheet_is_served_as_css() {
    let app = test_app();

    let resp = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".carousel-track"));
}

#[test]
fn health_check() {
    let app = test_app();
    let resp = handle(get("/healthz"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_path_is_not_found() {
    let app = test_app();
    assert!(matches!(
        handle(get("/listings/42"), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn wrong_method_on_known_path() {
    let app = test_app();

    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &app), Err(ServerError::MethodNotAllowed)));

    assert!(matches!(
        handle(get("/contact"), &app),
        Err(ServerError::MethodNotAllowed)
    ));
}

#[test]
fn errors_render_as_html_pages() {
    let resp = error_to_response(ServerError::BadRequest("index must be a non-negative integer".into()));
    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Error 400"));
    assert!(body.contains("index must be a non-negative integer"));

    // Internal details stay in the log.
    let resp = error_to_response(ServerError::Internal("secret detail".into()));
    assert_eq!(resp.status(), 500);
    let body = body_string(resp);
    assert!(body.contains("Internal Server Error"));
    assert!(!body.contains("secret detail"));
}

#[test]
fn header_turns_solid_after_scrolling() {
    let app = test_app();
    let css = body_string(handle(get("/static/main.css"), &app).unwrap());

    assert!(css.contains("@keyframes header-solid"));
    assert!(css.contains("animation-timeline: scroll(root)"));
    assert!(css.contains("animation-range: 0 50px"));
}
