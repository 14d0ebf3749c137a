use std::net::TcpListener;

use boldflow::webhook_client::{FALLBACK_MESSAGE, REJECTED_MESSAGE};

use crate::helper::{assert_is_redirect_to, spawn_app, spawn_app_with};

fn jane() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@acme.com",
        "company": "",
        "service": "workflow",
        "message": "Need help automating invoicing.",
    })
}

#[tokio::test]
async fn contact_page_starts_with_an_empty_form() {
    let app = spawn_app().await;

    let html = app.get_contact_html().await;

    assert!(html.contains(r#"id="contact-form""#));
    assert!(html.contains(r#"<option value="">Select a service</option>"#));
    assert!(!html.contains("Message Sent!"));
    assert!(!html.contains(r#"role="alert""#));
    assert!(!html.contains(r#"class="btn btn-primary" disabled"#));
}

#[tokio::test]
async fn contact_form_offers_every_service() {
    let app = spawn_app().await;

    let html = app.get_contact_html().await;

    for value in [
        "chatbots",
        "workflow",
        "analytics",
        "custom-ai",
        "data-pipelines",
        "content",
        "unsure",
    ] {
        assert!(html.contains(&format!(r#"<option value="{value}">"#)), "{value}");
    }
}

#[tokio::test]
async fn valid_submission_posts_the_record_verbatim() {
    let app = spawn_app().await;
    app.mock_webhook(200, 1).await;

    let res = app.post_contact(&jane()).await;
    assert_is_redirect_to(&res, "/contact");

    let bodies = app.webhook_bodies().await;
    assert_eq!(bodies, vec![jane()]);
}

#[tokio::test]
async fn success_view_is_shown_once_after_delivery() {
    let app = spawn_app().await;
    app.mock_webhook(200, 1).await;

    let res = app.post_contact(&jane()).await;
    assert_is_redirect_to(&res, "/contact");

    // follow the redirect
    let html = app.get_contact_html().await;
    assert!(html.contains("Message Sent!"));
    assert!(html.contains(r#"id="send-another""#));
    assert!(!html.contains(r#"id="contact-form""#));

    // "Send another message" is a fresh, empty form
    let html = app.get_contact_html().await;
    assert!(!html.contains("Message Sent!"));
    assert!(html.contains(r#"id="contact-form""#));
    assert!(!html.contains("Jane Doe"));
}

#[tokio::test]
async fn invalid_submission_is_rejected_without_calling_the_webhook() {
    let app = spawn_app().await;
    app.mock_webhook(200, 0).await;

    let cases = [
        ("name", "", "name is empty."),
        ("email", "", "email is empty."),
        ("email", "not-an-email", "email is malformed."),
        ("service", "", "service is not selected."),
        ("service", "blockchain", "service is unknown."),
        ("message", "", "message is empty."),
    ];
    for (field, value, description) in cases {
        let mut body = jane();
        body[field] = value.into();

        let res = app.post_contact(&body).await;
        assert_eq!(400, res.status().as_u16(), "{description}");

        let html = res.text().await.unwrap();
        assert!(html.contains(r#"role="alert""#), "{description}");
        assert!(html.contains(r#"id="contact-form""#), "{description}");
    }
}

#[tokio::test]
async fn invalid_submission_keeps_what_was_typed() {
    let app = spawn_app().await;
    app.mock_webhook(200, 0).await;

    let mut body = jane();
    body["email"] = "".into();
    let res = app.post_contact(&body).await;
    assert_eq!(400, res.status().as_u16());

    let html = res.text().await.unwrap();
    assert!(html.contains(r#"value="Jane Doe""#));
    assert!(html.contains(r#"<option value="workflow" selected>"#));
    assert!(html.contains("Need help automating invoicing.</textarea>"));
}

#[tokio::test]
async fn rejected_delivery_shows_the_error_and_keeps_the_form() {
    let app = spawn_app().await;
    app.mock_webhook(500, 1).await;

    let res = app.post_contact(&jane()).await;
    assert_eq!(502, res.status().as_u16());

    let html = res.text().await.unwrap();
    assert!(html.contains(REJECTED_MESSAGE));
    assert!(html.contains(r#"value="Jane Doe""#));
    assert!(html.contains(r#"value="jane@acme.com""#));
    assert!(html.contains("Need help automating invoicing.</textarea>"));
    assert!(!html.contains("Message Sent!"));
}

#[tokio::test]
async fn failed_delivery_can_be_retried() {
    let app = spawn_app().await;
    app.mock_webhook(503, 1).await;

    let res = app.post_contact(&jane()).await;
    assert_eq!(502, res.status().as_u16());

    app.webhook_server.reset().await;
    app.mock_webhook(200, 1).await;

    let res = app.post_contact(&jane()).await;
    assert_is_redirect_to(&res, "/contact");
    assert!(app.get_contact_html().await.contains("Message Sent!"));
}

#[tokio::test]
async fn unreachable_webhook_shows_the_fallback_message() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let app = spawn_app_with(|config| {
        config.webhook.url = format!("http://127.0.0.1:{port}/webhook/contact");
    })
    .await;

    let res = app.post_contact(&jane()).await;
    assert_eq!(502, res.status().as_u16());

    let html = res.text().await.unwrap();
    assert!(html.contains(FALLBACK_MESSAGE));
    assert!(!html.contains("127.0.0.1"));
    assert!(html.contains(r#"value="Jane Doe""#));
}

#[tokio::test]
async fn whitespace_name_is_delivered_as_typed() {
    let app = spawn_app().await;
    app.mock_webhook(200, 1).await;

    let mut body = jane();
    body["name"] = "   ".into();
    let res = app.post_contact(&body).await;
    assert_is_redirect_to(&res, "/contact");

    assert_eq!(app.webhook_bodies().await, vec![body]);
}

#[tokio::test]
async fn long_multibyte_message_is_delivered() {
    let app = spawn_app().await;
    app.mock_webhook(200, 1).await;

    let mut body = jane();
    body["message"] = "é".repeat(3000).into();
    let res = app.post_contact(&body).await;
    assert_is_redirect_to(&res, "/contact");

    assert_eq!(app.webhook_bodies().await, vec![body]);
}

#[tokio::test]
async fn oversized_form_is_answered_with_the_form() {
    let app = spawn_app().await;
    app.mock_webhook(200, 0).await;

    let mut body = jane();
    body["message"] = "我".repeat(6200).into();
    let res = app.post_contact(&body).await;
    assert_eq!(413, res.status().as_u16());
    assert_eq!(
        res.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let html = res.text().await.unwrap();
    assert!(html.contains(r#"id="contact-form""#));
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("Your message is too long."));
}

#[tokio::test]
async fn form_fields_carry_the_length_limits() {
    let app = spawn_app().await;

    let html = app.get_contact_html().await;

    assert!(html.contains(r#"name="name" type="text" class="input" placeholder="John Doe" value="" maxlength="256" required"#));
    assert!(html.contains(r#"maxlength="256">"#));
    assert!(html.contains(r#"maxlength="5000""#));
}
