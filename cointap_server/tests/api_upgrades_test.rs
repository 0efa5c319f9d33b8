mod test_utils;

use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::test_utils::tests::{base_url, setup_web_app};

#[tokio::test]
async fn test_upgrades_for_unknown_player_is_empty_not_an_error() {
    let port = 8096;
    let (client, _store) = setup_web_app(port).await;

    let res = client
        .get(format!("{}/api/players/999/upgrades", base_url(port)))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let upgrades: Vec<Value> = res.json().await.unwrap();
    assert!(upgrades.is_empty());
}

#[tokio::test]
async fn test_add_upgrade_with_explicit_level_and_listing_order() {
    let port = 8097;
    let (client, _store) = setup_web_app(port).await;

    for (kind, level) in [("click_power", None), ("auto_click", Some(3))] {
        let mut body = json!({ "playerId": 1, "type": kind });
        if let Some(level) = level {
            body["level"] = json!(level);
        }
        let res = client
            .post(format!("{}/api/upgrades", base_url(port)))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    // An upgrade for a different player must not show up below.
    client
        .post(format!("{}/api/upgrades", base_url(port)))
        .json(&json!({ "playerId": 2, "type": "energy_regen" }))
        .send()
        .await
        .unwrap();

    let res = client
        .get(format!("{}/api/players/1/upgrades", base_url(port)))
        .send()
        .await
        .unwrap();
    let upgrades: Vec<Value> = res.json().await.unwrap();

    assert_eq!(upgrades.len(), 2);
    assert_eq!(upgrades[0]["type"], "click_power");
    assert_eq!(upgrades[0]["level"], 1);
    assert_eq!(upgrades[1]["type"], "auto_click");
    assert_eq!(upgrades[1]["level"], 3);
}

#[tokio::test]
async fn test_add_upgrade_with_bad_body_is_400() {
    let port = 8098;
    let (client, _store) = setup_web_app(port).await;

    // `playerId` and `type` are required.
    let res = client
        .post(format!("{}/api/upgrades", base_url(port)))
        .json(&json!({ "type": "click_power" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("playerId"));
}
