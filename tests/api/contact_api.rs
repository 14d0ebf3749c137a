use boldflow::webhook_client::REJECTED_MESSAGE;

use crate::helper::spawn_app;

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
async fn delivered_record_replies_succeeded() {
    let app = spawn_app().await;
    app.mock_webhook(200, 1).await;

    let res = app.post_contact_json(&jane()).await;
    assert_eq!(200, res.status().as_u16());

    let reply: serde_json::Value = res.json().await.unwrap();
    assert_eq!(reply, serde_json::json!({ "state": "succeeded" }));
    assert_eq!(app.webhook_bodies().await, vec![jane()]);
}

#[tokio::test]
async fn rejected_record_replies_failed() {
    let app = spawn_app().await;
    app.mock_webhook(400, 1).await;

    let res = app.post_contact_json(&jane()).await;
    assert_eq!(502, res.status().as_u16());

    let reply: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        reply,
        serde_json::json!({ "state": "failed", "reason": REJECTED_MESSAGE })
    );
}

#[tokio::test]
async fn null_company_is_sent_as_empty() {
    let app = spawn_app().await;
    app.mock_webhook(200, 1).await;

    let mut body = jane();
    body["company"] = serde_json::Value::Null;
    let res = app.post_contact_json(&body).await;
    assert_eq!(200, res.status().as_u16());

    assert_eq!(app.webhook_bodies().await, vec![jane()]);
}

#[tokio::test]
async fn invalid_record_is_a_bad_request() {
    let app = spawn_app().await;
    app.mock_webhook(200, 0).await;

    let mut missing_message = jane();
    missing_message.as_object_mut().unwrap().remove("message");
    let mut bad_email = jane();
    bad_email["email"] = "jane-at-acme".into();

    for (body, description) in [
        (missing_message, "message is missing."),
        (bad_email, "email is malformed."),
    ] {
        let res = app.post_contact_json(&body).await;
        assert_eq!(400, res.status().as_u16(), "{description}");

        let reply: serde_json::Value = res.json().await.unwrap();
        assert_eq!(reply["state"], "failed", "{description}");
        assert!(reply["reason"].is_string(), "{description}");
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = spawn_app().await;
    app.mock_webhook(200, 0).await;

    let res = app
        .api_client
        .post(format!("{}/api/contact", &app.address))
        .header("Content-Type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .expect("failed to execute request.");
    assert_eq!(400, res.status().as_u16());

    let reply: serde_json::Value = res.json().await.unwrap();
    assert_eq!(reply["state"], "failed");
}
