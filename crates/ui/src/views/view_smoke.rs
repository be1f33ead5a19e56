use campus_core::playback::MediaEvent;
use serde_json::json;
use services::{Method, StubBackend};

use super::test_harness::{TEST_PHONE, ViewKind, setup_view_harness};

const TOPIC_PATH: &str = "/api/topics/42/";
const MARK_COMPLETED_PATH: &str = "/api/topics/42/mark_completed/";

fn topic_backend() -> StubBackend {
    let backend = StubBackend::new();
    backend.respond(
        Method::GET,
        TOPIC_PATH,
        200,
        json!({
            "id": 42,
            "title": "Intro",
            "video_file": "/m/42.mp4",
            "ppt_file": "/m/42.pptx",
            "description": "Welcome to the course."
        }),
    );
    backend.respond(
        Method::POST,
        MARK_COMPLETED_PATH,
        200,
        json!({"status": "Topic marked as completed"}),
    );
    backend
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_renders_content_with_one_player() {
    let mut harness = setup_view_harness(ViewKind::Topic(42), topic_backend(), true).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Intro"), "missing title in {html}");
    assert!(html.contains("Welcome to the course."), "missing description in {html}");
    assert!(html.contains("Download Presentation"), "missing presentation link in {html}");
    assert!(html.contains("http://localhost:8000/m/42.pptx"), "missing presentation href in {html}");
    assert_eq!(harness.players.sources(), ["http://localhost:8000/m/42.mp4"]);
    assert_eq!(harness.backend.count(&Method::GET, TOPIC_PATH), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_shows_playback_progress() {
    let mut harness = setup_view_harness(ViewKind::Topic(42), topic_backend(), true).await;
    harness.rebuild();
    harness.settle().await;

    harness.players.fire(MediaEvent::TimeUpdate {
        position: 5.0,
        duration: 10.0,
    });
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains(r#"aria-valuenow="50""#), "missing progress in {html}");
    assert_eq!(harness.backend.count(&Method::POST, MARK_COMPLETED_PATH), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_failure_renders_message_without_player() {
    let backend = StubBackend::new();
    backend.respond(Method::GET, TOPIC_PATH, 500, json!({"detail": "Server error"}));
    let mut harness = setup_view_harness(ViewKind::Topic(42), backend, true).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load topic content. Please try again."),
        "missing failure message in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(!html.contains("Intro"), "unexpected content in {html}");
    assert!(harness.players.sources().is_empty());
    assert!(harness.services.gate().is_authenticated());
}

#[tokio::test(flavor = "current_thread")]
async fn end_of_media_reports_completion_once() {
    let mut harness = setup_view_harness(ViewKind::Topic(42), topic_backend(), true).await;
    harness.rebuild();
    harness.settle().await;

    harness.players.fire(MediaEvent::Ended);
    harness.players.fire(MediaEvent::Ended);
    harness.settle().await;
    assert_eq!(harness.backend.count(&Method::POST, MARK_COMPLETED_PATH), 1);

    harness.players.fire(MediaEvent::Ended);
    harness.settle().await;
    assert_eq!(harness.backend.count(&Method::POST, MARK_COMPLETED_PATH), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn failed_completion_report_keeps_the_page() {
    let backend = topic_backend();
    backend.unreachable(Method::POST, MARK_COMPLETED_PATH);
    let mut harness = setup_view_harness(ViewKind::Topic(42), backend, true).await;
    harness.rebuild();
    harness.settle().await;

    harness.players.fire(MediaEvent::Ended);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Intro"), "page should stay in {html}");
    assert_eq!(harness.backend.count(&Method::POST, MARK_COMPLETED_PATH), 1);
    assert_eq!(harness.players.destroyed(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn unauthorized_topic_signs_out_and_redirects() {
    let backend = StubBackend::new();
    backend.respond(Method::GET, TOPIC_PATH, 401, json!({"detail": "Session expired."}));
    let mut harness = setup_view_harness(ViewKind::GuardedTopic(42), backend, true).await;
    harness.rebuild();
    harness.settle().await;

    assert!(!harness.services.gate().is_authenticated());
    assert_eq!(harness.redirects.requested(), 1);
    let html = harness.render();
    assert!(!html.contains("Intro"), "protected content in {html}");
    assert!(
        html.contains("Sign in page") || html.contains("Redirecting to sign in"),
        "no redirect in {html}"
    );
    assert!(harness.players.sources().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn anonymous_visitor_never_fetches_protected_topic() {
    let mut harness =
        setup_view_harness(ViewKind::GuardedTopic(42), topic_backend(), false).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(!html.contains("Intro"), "protected content in {html}");
    assert_eq!(harness.backend.count(&Method::GET, TOPIC_PATH), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn logout_unmounts_player_exactly_once() {
    let mut harness = setup_view_harness(ViewKind::GuardedTopic(42), topic_backend(), true).await;
    harness.rebuild();
    harness.settle().await;
    assert_eq!(harness.players.sources().len(), 1);

    harness.services.auth().logout().await;
    harness.settle().await;

    assert_eq!(harness.players.destroyed(), 1);
    let html = harness.render();
    assert!(!html.contains("Intro"), "protected content in {html}");

    harness.players.fire(MediaEvent::Ended);
    harness.settle().await;
    assert_eq!(harness.players.destroyed(), 1);
    assert_eq!(harness.backend.count(&Method::POST, MARK_COMPLETED_PATH), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_lists_cards() {
    let backend = StubBackend::new();
    backend.respond(
        Method::GET,
        "/api/courses/",
        200,
        json!([
            {"id": 1, "title": "Physics", "description": "Motion and forces",
             "class_level": "9-12", "progress": {"overall_progress": 50.0}},
            {"id": 2, "title": "Biology", "description": "Cells"}
        ]),
    );
    let mut harness = setup_view_harness(ViewKind::Courses, backend, true).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Available Courses"), "missing heading in {html}");
    assert!(html.contains("Physics"), "missing course in {html}");
    assert!(html.contains("Biology"), "missing course in {html}");
    assert!(html.contains("Classes 9-12"), "missing class level in {html}");
    assert!(html.contains("Progress: 50%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_shows_loading_before_the_listing_arrives() {
    let backend = StubBackend::new();
    backend.respond(Method::GET, "/api/courses/", 200, json!([]));
    let mut harness = setup_view_harness(ViewKind::Courses, backend, true).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Loading..."), "missing loading state in {html}");
    assert!(!html.contains("Idle"), "internal state leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_failure_renders_generic_error() {
    let backend = StubBackend::new();
    backend.respond(Method::GET, "/api/courses/", 503, json!({"detail": "down"}));
    let mut harness = setup_view_harness(ViewKind::Courses, backend, true).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_lists_topics_in_order() {
    let backend = StubBackend::new();
    backend.respond(
        Method::GET,
        "/api/courses/",
        200,
        json!([{
            "id": 1,
            "title": "Physics",
            "topics": [
                {"id": 11, "title": "Energy", "order": 2},
                {"id": 10, "title": "Motion", "order": 1, "video_file": "/m/10.mp4"}
            ],
            "progress": {"overall_progress": 50.0, "completed_topics": [10]}
        }]),
    );
    let mut harness = setup_view_harness(ViewKind::Course(1), backend, true).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    let motion = html.find("Motion").expect("Motion listed");
    let energy = html.find("Energy").expect("Energy listed");
    assert!(motion < energy, "topics out of order in {html}");
    assert!(html.contains("Completed"), "missing completion marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_unknown_course() {
    let backend = StubBackend::new();
    backend.respond(Method::GET, "/api/courses/", 200, json!([]));
    let mut harness = setup_view_harness(ViewKind::Course(9), backend, true).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Course not found."), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_shows_last_error() {
    let backend = StubBackend::new();
    backend.respond(
        Method::POST,
        "/api/auth/login/",
        404,
        json!({"message": "Phone number not found."}),
    );
    let mut harness = setup_view_harness(ViewKind::Login, backend, false).await;
    let _ = harness.services.auth().login(TEST_PHONE).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Sign in"), "missing form in {html}");
    assert!(html.contains("Phone number not found."), "missing error in {html}");
}
