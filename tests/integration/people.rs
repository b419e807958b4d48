use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoho_api::people::{DataType, Operation, MAX_PAGE_FETCHES};
use zoho_api::{
    AllRecordsOptions, ErrorKind, PaginationConfig, SearchOptions, SortOrder, TimelineOptions,
};

use crate::common::{mount_token_endpoint, people_client};

fn employees(start: usize, len: usize) -> Value {
    let records: Vec<Value> = (start..start + len)
        .map(|i| json!({"Zoho_ID": 1000 + i, "FirstName": format!("Employee {i}")}))
        .collect();
    json!({"response": {"result": records, "status": 0}})
}

#[tokio::test]
async fn test_discovery_flow() {
    let accounts = MockServer::start().await;
    let people = MockServer::start().await;
    mount_token_endpoint(&accounts, "1000.token", 1).await;

    Mock::given(method("GET"))
        .and(path("/forms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"result": [
                {"formLinkName": "employee", "displayName": "Employee", "PermissionDetails": {"Add": 1, "Edit": 1, "View": 1, "Delete": 1}},
                {"formLinkName": "P_Assets", "displayName": "Assets"}
            ]}
        })))
        .mount(&people)
        .await;

    Mock::given(method("GET"))
        .and(path("/forms/employee/components"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"result": [
                {"labelname": "FirstName", "displayname": "First Name", "comptype": "Text", "isMandatory": true},
                {"labelname": "Gender", "comptype": "Radio", "Options": [{"Id": 1, "Value": "Female"}]},
                {"labelname": "Photo", "comptype": "Image"}
            ]}
        })))
        .mount(&people)
        .await;

    let client = people_client(&people, &accounts, PaginationConfig::default());

    let modules = client.get_modules().await.unwrap();
    assert_eq!(modules[0].api_name, "employee");
    assert!(modules[0].supports(Operation::Delete));
    assert_eq!(modules[1].api_name, "P_Assets");
    assert!(modules.iter().any(|m| m.api_name == "timelogs"));

    let fields = client.get_fields("employees").await.unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].display_label, "First Name");
    assert!(fields[0].required);
    assert_eq!(fields[1].data_type, DataType::Picklist);
    assert_eq!(fields[1].pick_list_values.as_ref().unwrap()[0].id.as_deref(), Some("1"));
    assert_eq!(fields[2].data_type, DataType::Other("image".into()));
    assert!(fields[2].pick_list_values.is_none());
}

#[tokio::test]
async fn test_full_pagination_with_sort_and_fields() {
    let accounts = MockServer::start().await;
    let people = MockServer::start().await;
    mount_token_endpoint(&accounts, "1000.token", 1).await;

    for (page, len) in [(1usize, 50usize), (2, 50), (3, 12)] {
        Mock::given(method("GET"))
            .and(path("/forms/employee/getRecords"))
            .and(query_param("page", page.to_string()))
            .and(query_param("per_page", "50"))
            .and(query_param("fields", "FirstName"))
            .and(query_param("sort_by", "FirstName"))
            .and(query_param("sort_order", "asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(employees((page - 1) * 50, len)))
            .expect(1)
            .mount(&people)
            .await;
    }

    let client = people_client(&people, &accounts, PaginationConfig::default());
    let result = client
        .get_all_records(
            "employee",
            &AllRecordsOptions::default()
                .with_per_page(50)
                .with_fields(["FirstName"])
                .with_sort("FirstName", SortOrder::Asc),
        )
        .await
        .unwrap();

    assert_eq!(result.total_records, 112);
    assert_eq!(result.data[111].id, "1111");
    assert!(!result.has_more);
    assert_eq!(result.current_page, 3);
    assert_eq!(result.total_pages, 3);

    let wire = serde_json::to_value(&result).unwrap();
    assert_eq!(wire["totalRecords"], 112);
    assert_eq!(wire["data"][0]["FirstName"], "Employee 0");
}

#[tokio::test]
async fn test_runaway_pagination_is_cut_off() {
    let accounts = MockServer::start().await;
    let people = MockServer::start().await;
    mount_token_endpoint(&accounts, "1000.token", 1).await;

    Mock::given(method("GET"))
        .and(path("/forms/employee/getRecords"))
        .respond_with(ResponseTemplate::new(200).set_body_json(employees(0, 5)))
        .expect(u64::from(MAX_PAGE_FETCHES))
        .mount(&people)
        .await;

    let client = people_client(&people, &accounts, PaginationConfig::default());
    let result = client
        .get_all_records(
            "employee",
            &AllRecordsOptions::default()
                .with_per_page(5)
                .with_max_records(100_000),
        )
        .await
        .unwrap();

    assert_eq!(result.total_records, 250);
    assert!(result.has_more);
}

#[tokio::test]
async fn test_search_clamps_page_size_and_signals_rate_limits() {
    let accounts = MockServer::start().await;
    let people = MockServer::start().await;
    mount_token_endpoint(&accounts, "1000.token", 1).await;

    Mock::given(method("GET"))
        .and(path("/forms/employee/search"))
        .and(query_param("per_page", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(employees(0, 3)))
        .up_to_n_times(1)
        .mount(&people)
        .await;

    Mock::given(method("GET"))
        .and(path("/forms/employee/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&people)
        .await;

    let client = people_client(&people, &accounts, PaginationConfig::default());
    let options = SearchOptions::default().with_per_page(500);

    let page = client
        .search_records("employee", "(FirstName:Employee)", &options)
        .await
        .unwrap();
    assert_eq!(page.info.per_page, 200);
    assert_eq!(page.info.count, 3);

    let err = client
        .search_records("employee", "(FirstName:Employee)", &options)
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RateLimited { .. }));
    assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
}

#[tokio::test]
async fn test_timeline_soft_failure() {
    let accounts = MockServer::start().await;
    let people = MockServer::start().await;
    mount_token_endpoint(&accounts, "1000.token", 1).await;

    Mock::given(method("GET"))
        .and(path("/P_Assets/77/timeline"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&people)
        .await;

    let client = people_client(&people, &accounts, PaginationConfig::default());
    let result = client
        .get_timeline("P_Assets", "77", &TimelineOptions::default())
        .await;

    assert!(result.timeline.is_empty());
    assert!(result
        .warning
        .as_deref()
        .is_some_and(|w| w.starts_with("Timeline not available for P_Assets/77: ")));

    let wire = serde_json::to_value(&result).unwrap();
    assert_eq!(wire["timeline"], json!([]));
    assert!(wire.get("info").is_none());
}
