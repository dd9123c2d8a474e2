mod common;

use common::TestServer;

#[tokio::test]
async fn list_games_reports_availability() {
    let server = TestServer::new().await;
    server.write_swf("fishy.swf");

    let resp = reqwest::get(format!("{}/api/v1/games", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();

    let games = body["games"].as_array().unwrap();
    assert_eq!(games.len(), 3);

    let fishy = games.iter().find(|g| g["slug"] == "fishy").unwrap();
    assert_eq!(fishy["available"], true);
    assert_eq!(fishy["expected_path"], "games/fishy.swf");
    assert_eq!(fishy["title"], "Fishy");

    let copter = games.iter().find(|g| g["slug"] == "copter").unwrap();
    assert_eq!(copter["available"], false);
    assert_eq!(copter["title"], "Helicopter Game");
}

#[tokio::test]
async fn get_game_resolves_present_title() {
    let server = TestServer::new().await;
    server.write_swf("fishy.swf");

    let resp = reqwest::get(format!("{}/api/v1/games/fishy", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["expected_path"], "games/fishy.swf");
    assert_eq!(body["available"], true);
}

#[tokio::test]
async fn get_game_missing_asset_names_the_path() {
    let server = TestServer::new().await;
    let resp = reqwest::get(format!("{}/api/v1/games/copter", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(
        body["error"].as_str().unwrap().contains("games/copter.swf"),
        "{body}"
    );
}

#[tokio::test]
async fn get_game_rejects_traversal_slug() {
    let server = TestServer::new().await;
    // ..%2Fsecret decodes to ../secret in the path parameter
    let resp = reqwest::get(format!("{}/api/v1/games/..%2Fsecret", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn health_counts_playable_and_missing() {
    let server = TestServer::new().await;
    server.write_swf("fishy.swf");

    let resp = reqwest::get(format!("{}/health", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog"]["titles"], 3);
    assert_eq!(body["catalog"]["playable"], 1);
    assert_eq!(body["catalog"]["missing"], 2);
}

#[tokio::test]
async fn readiness_requires_a_catalog() {
    let server = TestServer::new().await;
    let resp = reqwest::get(format!("{}/ready", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.text().await.unwrap(), "ready");

    let empty = TestServer::with_catalog("").await;
    let resp = reqwest::get(format!("{}/ready", empty.base_url()))
        .await
        .unwrap();
    assert!(resp.text().await.unwrap().starts_with("not ready"));
}

#[tokio::test]
async fn static_site_is_served_from_web_root() {
    let server = TestServer::new().await;
    let resp = reqwest::get(server.base_url()).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("<title>deck</title>"));
}
