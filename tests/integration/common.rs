use std::sync::Once;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoho_api::auth::OAuthClient;
use zoho_api::{
    ClientConfig, OAuthTokenProvider, PaginationConfig, PeopleClient, Region, ZohoCredentials,
};

static TRACING: Once = Once::new();

/// Install a tracing subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Mount a token endpoint answering with `access_token`.
pub async fn mount_token_endpoint(accounts: &MockServer, access_token: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": access_token,
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(expected_calls)
        .mount(accounts)
        .await;
}

/// People client backed by an OAuth provider, both pointed at mock servers.
pub fn people_client(
    people: &MockServer,
    accounts: &MockServer,
    pagination: PaginationConfig,
) -> PeopleClient<OAuthTokenProvider> {
    init_tracing();

    let credentials = ZohoCredentials::new("client-id", "client-secret", "refresh", Region::Us);
    let provider =
        OAuthTokenProvider::with_oauth_client(credentials, OAuthClient::new(accounts.uri()));
    let config = ClientConfig::builder()
        .with_timeout(Duration::from_secs(5))
        .with_pagination(pagination.with_rate_limit_delay(Duration::ZERO))
        .build();

    PeopleClient::with_config(people.uri(), provider, config).expect("valid mock base URL")
}
