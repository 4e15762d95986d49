use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, htmx_get, test_app};

#[test]
fn htmx_request_gets_partial() {
    let app = test_app();

    let resp = handle(htmx_get("/showcase?category=buy&index=0&action=next"), &app)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("id=\"showcase\""));
    assert!(body.contains("data-index=\"1\""));

    // Partial only, so htmx can swap it in place.
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
    assert!(!body.contains("hero-section"));
}

#[test]
fn next_is_clamped_at_last_card() {
    let app = test_app();
    let body = body_string(
        handle(htmx_get("/showcase?category=buy&index=3&action=next"), &app).unwrap(),
    );

    assert!(body.contains("data-index=\"3\""));
    // Next control is rendered disabled, previous stays live.
    assert!(body.contains("data-testid=\"carousel-next\" aria-label=\"Next listing\" disabled"));
    assert!(body.contains("action=previous"));
}

#[test]
fn first_card_disables_previous() {
    let app = test_app();
    let body = body_string(handle(htmx_get("/showcase?category=sold&index=0"), &app).unwrap());

    assert!(body.contains("data-testid=\"carousel-prev\" aria-label=\"Previous listing\" disabled"));
    assert!(body.contains("action=next"));
}

#[test]
fn selecting_a_category_resets_index() {
    let app = test_app();
    let body = body_string(
        handle(
            htmx_get("/showcase?category=buy&index=2&action=select&target=rent"),
            &app,
        )
        .unwrap(),
    );

    assert!(body.contains("data-category=\"rent\""));
    assert!(body.contains("data-index=\"0\""));
    assert!(body.contains("New York, NY"));
    assert!(!body.contains("Atlanta, GA"));
}

#[test]
fn stale_index_is_clamped() {
    let app = test_app();
    let body = body_string(handle(htmx_get("/showcase?category=sold&index=99"), &app).unwrap());

    assert!(body.contains("data-category=\"sold\""));
    assert!(body.contains("data-index=\"1\""));
}

#[test]
fn jump_moves_track_by_card_width_plus_gap() {
    let app = test_app();
    let body = body_string(
        handle(htmx_get("/showcase?category=buy&action=jump&target=2"), &app).unwrap(),
    );

    // Default card width 350 + 24 gap.
    // Buy holds 4 cards: 4 * 350 + 3 * 24 = 1472px of track.
    assert!(body.contains("max(-748px, calc(100% - 1472px))"));
    assert!(body.contains("width: 350px;"));
    assert!(body.contains("aria-current=\"true\""));
}

#[test]
fn dots_match_category_size() {
    let app = test_app();
    let body = body_string(handle(htmx_get("/showcase?category=rent"), &app).unwrap());

    assert_eq!(body.matches("aria-label=\"Show listing").count(), 3);
}

#[test]
fn plain_navigation_redirects_to_full_page() {
    let app = test_app();

    let resp = handle(get("/showcase?category=rent&index=0&action=next"), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/?category=rent&index=1#showcase"
    );
}

#[test]
fn unknown_category_is_bad_request() {
    let app = test_app();

    match handle(htmx_get("/showcase?category=villa"), &app) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("villa")),
        other => panic!("expected BadRequest, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn negative_jump_target_lands_on_first_card() {
    let app = test_app();
    let body = body_string(
        handle(
            htmx_get("/showcase?category=buy&index=2&action=jump&target=-1"),
            &app,
        )
        .expect("negative target should clamp, not fail"),
    );

    assert!(body.contains("data-category=\"buy\""));
    assert!(body.contains("data-index=\"0\""));
}

#[test]
fn huge_jump_target_lands_on_last_card() {
    let app = test_app();
    let body = body_string(
        handle(
            htmx_get("/showcase?category=buy&index=0&action=jump&target=99999999999999999999999"),
            &app,
        )
        .expect("oversized target should clamp, not fail"),
    );

    assert!(body.contains("data-index=\"3\""));
}

#[test]
fn huge_state_index_is_clamped() {
    let app = test_app();
    let body = body_string(
        handle(
            htmx_get("/showcase?category=sold&index=99999999999999999999999"),
            &app,
        )
        .unwrap(),
    );

    assert!(body.contains("data-category=\"sold\""));
    assert!(body.contains("data-index=\"1\""));
}
