use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use shared::error::{ApiError, ErrorCode};
use shared::protocol::NewsletterSubscription;
use tokio::net::TcpListener;
use url::Url;

use super::*;

#[derive(Clone, Default)]
struct RecordingApi {
    hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
    respond_with: Arc<Mutex<Option<(u16, Value)>>>,
}

impl RecordingApi {
    fn rejecting(status: u16, body: Value) -> Self {
        let api = Self::default();
        *api.respond_with.lock().expect("lock") = Some((status, body));
        api
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn last_body(&self) -> Option<Value> {
        self.last_body.lock().expect("lock").clone()
    }
}

async fn record(
    State(api): State<RecordingApi>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    api.hits.fetch_add(1, Ordering::SeqCst);
    *api.last_body.lock().expect("lock") = Some(body);
    match api.respond_with.lock().expect("lock").clone() {
        Some((status, body)) => (
            StatusCode::from_u16(status).expect("status"),
            Json(body),
        ),
        None => (StatusCode::OK, Json(json!({ "message": "received" }))),
    }
}

async fn spawn_api(api: RecordingApi) -> Url {
    let app = Router::new()
        .route("/api/contact", post(record))
        .route("/api/newsletter", post(record))
        .with_state(api);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    Url::parse(&format!("http://{addr}/")).expect("base url")
}

fn filled_wizard() -> ContactWizard {
    let mut wizard = ContactWizard::new();
    wizard.fields.name = "Sarah Johnson".to_string();
    wizard.fields.email = "sarah@example.com".to_string();
    wizard.fields.service = "individual-therapy".to_string();
    wizard.fields.message = "I would like to book a consultation.".to_string();
    wizard.fields.privacy = true;
    wizard
}

#[tokio::test]
async fn valid_newsletter_email_issues_exactly_one_request() {
    let api = RecordingApi::default();
    let base = spawn_api(api.clone()).await;
    let client = SubmissionClient::new(&base).expect("client");

    let mut form = NewsletterForm::new();
    form.email = "user@example.com".to_string();
    let subscription = form.begin_submission().expect("subscription");

    client
        .submit_newsletter(&subscription)
        .await
        .expect("accepted");
    form.submission_succeeded();

    assert_eq!(api.hits(), 1);
    assert_eq!(
        api.last_body(),
        Some(json!({ "email": "user@example.com" }))
    );
    assert!(form.email.is_empty());
}

#[tokio::test]
async fn invalid_newsletter_email_is_rejected_before_any_request() {
    let api = RecordingApi::default();
    let _base = spawn_api(api.clone()).await;

    let mut form = NewsletterForm::new();
    form.email = "not-an-email".to_string();
    assert!(form.begin_submission().is_none());
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn contact_payload_omits_empty_phone_on_the_wire() {
    let api = RecordingApi::default();
    let base = spawn_api(api.clone()).await;
    let client = SubmissionClient::new(&base).expect("client");

    let mut wizard = filled_wizard();
    let submission = wizard.begin_submission().expect("submission");
    client.submit_contact(&submission).await.expect("accepted");

    let body = api.last_body().expect("body");
    assert_eq!(body["name"], "Sarah Johnson");
    assert_eq!(body["service"], "individual-therapy");
    assert_eq!(body["privacy"], true);
    assert!(
        body.get("phone").is_none(),
        "empty phone must not be serialized"
    );
}

#[tokio::test]
async fn rejection_surfaces_the_server_provided_message() {
    let error_body = serde_json::to_value(ApiError::new(
        ErrorCode::Validation,
        "service temporarily unavailable",
    ))
    .expect("error body");
    let api = RecordingApi::rejecting(422, error_body);
    let base = spawn_api(api.clone()).await;
    let client = SubmissionClient::new(&base).expect("client");

    let mut wizard = filled_wizard();
    let submission = wizard.begin_submission().expect("submission");
    let err = client
        .submit_contact(&submission)
        .await
        .expect_err("rejected");

    assert!(matches!(
        err,
        SubmissionError::Rejected { status, .. } if status == StatusCode::UNPROCESSABLE_ENTITY
    ));
    assert_eq!(
        err.user_message("Failed to send your message. Please try again."),
        "service temporarily unavailable"
    );
    wizard.submission_failed();
    assert_eq!(wizard.fields.name, "Sarah Johnson");
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_the_generic_message() {
    let api = RecordingApi::rejecting(500, json!({ "oops": true }));
    let base = spawn_api(api.clone()).await;
    let client = SubmissionClient::new(&base).expect("client");

    let err = client
        .submit_newsletter(&NewsletterSubscription {
            email: "user@example.com".to_string(),
        })
        .await
        .expect_err("rejected");
    assert_eq!(
        err.user_message("Failed to subscribe. Please try again."),
        "Failed to subscribe. Please try again."
    );
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind and immediately drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let base = Url::parse(&format!("http://{addr}/")).expect("base url");
    let client = SubmissionClient::new(&base).expect("client");
    let err = client
        .submit_newsletter(&NewsletterSubscription {
            email: "user@example.com".to_string(),
        })
        .await
        .expect_err("transport failure");

    assert!(matches!(err, SubmissionError::Transport { .. }));
    assert_eq!(
        err.user_message("Failed to subscribe. Please try again."),
        "Failed to subscribe. Please try again."
    );
}
