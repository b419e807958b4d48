use serde_json::Value;
use tracing::{debug, instrument};
use zoho_client::shape::{self, extract_array};
use zoho_client::TokenProvider;

use crate::error::Result;
use crate::module::{merge_with_fallback, ModuleDescriptor};

impl<P: TokenProvider> super::PeopleClient<P> {
    /// List the modules (forms) of the organization.
    ///
    /// Upstream forms come first, followed by the well-known fallback modules
    /// the upstream list did not mention. Nothing is cached between calls.
    #[instrument(skip(self))]
    pub async fn get_modules(&self) -> Result<Vec<ModuleDescriptor>> {
        let body: Value = self
            .client
            .get_json("forms", &[])
            .await
            .map_err(|e| e.context("Failed to get modules"))?;

        let fetched: Vec<ModuleDescriptor> = extract_array(body, shape::MODULES)
            .iter()
            .filter_map(ModuleDescriptor::from_upstream)
            .collect();
        debug!(fetched = fetched.len(), "Fetched modules");

        Ok(merge_with_fallback(fetched))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::client;
    use crate::module::fallback_modules;
    use crate::Operation;
    use serde_json::json;
    use std::collections::HashSet;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_modules_merges_fallback() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forms"))
            .and(header("Authorization", "Zoho-oauthtoken token-0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": {
                    "result": [
                        {"formLinkName": "employee", "displayName": "Employee", "isDeletable": true},
                        {"formLinkName": "leave", "displayName": "Leave", "PermissionDetails": {"Add": 1, "Edit": 0, "View": 1, "Delete": 0}},
                        {"displayName": "No link name"}
                    ],
                    "status": 0
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, _) = client(mock_server.uri());
        let modules = client.get_modules().await.unwrap();
        let names: Vec<_> = modules.iter().map(|m| m.api_name.as_str()).collect();

        assert_eq!(
            names,
            vec!["employee", "leave", "employees", "departments", "designations", "attendance", "timelogs"]
        );
        assert!(modules[0].supports(Operation::Delete));
        assert!(!modules[1].supports(Operation::Update));
    }

    #[tokio::test]
    async fn test_no_upstream_modules_returns_fallback_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forms"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {"result": []}})))
            .mount(&mock_server)
            .await;

        let (client, _) = client(mock_server.uri());
        let modules = client.get_modules().await.unwrap();

        assert_eq!(modules, fallback_modules());
        let unique: HashSet<_> = modules.iter().map(|m| m.api_name.clone()).collect();
        assert_eq!(unique.len(), modules.len());
    }

    #[tokio::test]
    async fn test_get_modules_error_context() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forms"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let (client, _) = client(mock_server.uri());
        let err = client.get_modules().await.unwrap_err();

        assert!(err.is_api_error());
        assert!(err.to_string().starts_with("Failed to get modules: "));
    }

    #[tokio::test]
    async fn test_get_modules_upstream_failure_keeps_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forms"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "maintenance"})))
            .mount(&mock_server)
            .await;

        let (client, _) = client(mock_server.uri());
        let err = client.get_modules().await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.body(), Some("{\"message\":\"maintenance\"}"));
        assert!(err.to_string().starts_with("Failed to get modules: maintenance"));
    }
}
