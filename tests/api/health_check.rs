use crate::helper::spawn_app;

#[tokio::test]
async fn health_check() {
    let app = spawn_app().await;

    let res = app.get_html("/health_check").await;

    assert!(res.status().is_success());
    assert_eq!(Some(0), res.content_length());
}
