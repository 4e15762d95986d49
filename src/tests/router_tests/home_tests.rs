use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn home_page_renders_every_section() {
    let app = test_app();

    let resp = handle(get("/"), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    for testid in [
        "header",
        "hero-section",
        "stats-card",
        "properties-section",
        "about-section",
        "showcase-section",
        "contact-section",
        "footer",
    ] {
        assert!(
            body.contains(&format!("data-testid=\"{testid}\"")),
            "missing section {testid}"
        );
    }
    assert!(body.contains("Find Your Dream"));
    assert!(body.contains("HOUSFY"));
}

#[test]
fn featured_grid_shows_formatted_prices() {
    let app = test_app();
    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(body.contains("property-card-featured"));
    assert!(body.contains("$930,000"));
    assert!(body.contains("2,856 Sq Ft"));
    for id in 2..=4 {
        assert!(body.contains(&format!("property-card-{id}")));
    }
}

#[test]
fn default_showcase_is_buy_at_first_card() {
    let app = test_app();
    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(body.contains("data-category=\"buy\""));
    assert!(body.contains("data-index=\"0\""));
    assert!(body.contains("Atlanta, GA"));
    assert!(body.contains("3,126 Sq Ft"));
    assert!(!body.contains("New York, NY"));
}

#[test]
fn home_accepts_carousel_state_in_query() {
    let app = test_app();
    let body = body_string(handle(get("/?category=rent&index=1&action=next"), &app).unwrap());

    assert!(body.contains("data-category=\"rent\""));
    assert!(body.contains("data-index=\"2\""));
    assert!(body.contains("Seattle, WA"));
}
