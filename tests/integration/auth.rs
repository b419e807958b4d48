use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoho_api::{ListOptions, PaginationConfig};

use crate::common::{mount_token_endpoint, people_client};

#[tokio::test]
async fn test_token_is_minted_once_and_reused() {
    let accounts = MockServer::start().await;
    let people = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("client_id=client-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "1000.minted",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&accounts)
        .await;

    Mock::given(method("GET"))
        .and(path("/forms/employee/getRecords"))
        .and(header("Authorization", "Zoho-oauthtoken 1000.minted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": {"result": [{"id": "1"}]}
        })))
        .expect(2)
        .mount(&people)
        .await;

    let client = people_client(&people, &accounts, PaginationConfig::default());
    client.get_records("employee", &ListOptions::default()).await.unwrap();
    client.get_records("employee", &ListOptions::default()).await.unwrap();
}

#[tokio::test]
async fn test_rejected_token_is_refreshed_through_accounts_server() {
    let accounts = MockServer::start().await;
    let people = MockServer::start().await;

    // One token for the first request, one for the re-send.
    mount_token_endpoint(&accounts, "1000.rotating", 2).await;

    Mock::given(method("GET"))
        .and(path("/forms"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Invalid OAuth token"
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&people)
        .await;

    Mock::given(method("GET"))
        .and(path("/forms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": {"result": []}
        })))
        .expect(1)
        .mount(&people)
        .await;

    let client = people_client(&people, &accounts, PaginationConfig::default());
    let modules = client.get_modules().await.unwrap();
    assert_eq!(modules.len(), zoho_api::people::fallback_modules().len());
}

#[tokio::test]
async fn test_accounts_failure_surfaces_as_api_error() {
    let accounts = MockServer::start().await;
    let people = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "invalid_code"})),
        )
        .mount(&accounts)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&people)
        .await;

    let client = people_client(&people, &accounts, PaginationConfig::default());
    let err = client.get_modules().await.unwrap_err();

    assert!(err.is_api_error());
    let message = err.to_string();
    assert!(message.starts_with("Failed to get modules: "));
    assert!(message.contains("invalid_code"));
}
