//! Records, page envelopes and listing options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::lookup::first_str;

/// A record of any module.
///
/// Records have no fixed schema; every key other than `id` lands in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Create an empty record with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Map one upstream entry; non-objects yield `None`.
    ///
    /// The id is taken from `id`, `Zoho_ID` or `recordId`.
    pub(crate) fn from_upstream(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            debug!("Skipping non-object record entry");
            return None;
        };

        let id = first_str(&fields, &["id", "Zoho_ID", "recordId"]).unwrap_or_else(|| {
            debug!("Record entry has no id");
            String::new()
        });
        fields.remove("id");

        Some(Self { id, fields })
    }
}

/// Convert an extracted array into records, dropping non-objects.
pub(crate) fn records_from(values: Vec<Value>) -> Vec<Record> {
    values.into_iter().filter_map(Record::from_upstream).collect()
}

/// Metadata of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub per_page: u32,
    pub count: usize,
    pub more_records: bool,
}

/// One page of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult {
    pub data: Vec<Record>,
    pub info: PageInfo,
}

/// Records accumulated across several pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    pub data: Vec<Record>,
    pub total_records: usize,
    pub has_more: bool,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// The query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`search_records`](crate::PeopleClient::search_records).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Field API names to return.
    pub fields: Option<Vec<String>>,
    /// 1-based page, default 1.
    pub page: Option<u32>,
    /// Records per page, clamped to 200.
    pub per_page: Option<u32>,
}

impl SearchOptions {
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Options for [`get_records`](crate::PeopleClient::get_records).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    pub fields: Option<Vec<String>>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ListOptions {
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(order);
        self
    }
}

/// Options for [`get_all_records`](crate::PeopleClient::get_all_records).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllRecordsOptions {
    /// First page to fetch, default 1.
    pub page: Option<u32>,
    /// Records per page; defaults to the configured page size.
    pub per_page: Option<u32>,
    /// Cap on accumulated records; defaults to the configured batch size.
    pub max_records: Option<usize>,
    pub fields: Option<Vec<String>>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl AllRecordsOptions {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = Some(max_records);
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(order);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id_sources() {
        let r = Record::from_upstream(json!({"id": "100", "FirstName": "Ada"})).unwrap();
        assert_eq!(r.id, "100");
        assert_eq!(r.get("FirstName"), Some(&json!("Ada")));
        assert!(r.get("id").is_none());

        let r = Record::from_upstream(json!({"Zoho_ID": 412762000001234567u64})).unwrap();
        assert_eq!(r.id, "412762000001234567");
        assert!(r.get("Zoho_ID").is_some());

        let r = Record::from_upstream(json!({"recordId": "r-9"})).unwrap();
        assert_eq!(r.id, "r-9");
    }

    #[test]
    fn test_record_without_id_keeps_empty_id() {
        let r = Record::from_upstream(json!({"Name": "x"})).unwrap();
        assert_eq!(r.id, "");
    }

    #[test]
    fn test_non_objects_are_dropped() {
        let records = records_from(vec![json!({"id": "1"}), json!("noise"), json!(3), json!(null)]);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_record_serializes_flat() {
        let mut record = Record::new("7");
        record.fields.insert("Email".into(), json!("a@b.c"));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"id": "7", "Email": "a@b.c"})
        );
    }

    #[test]
    fn test_aggregated_result_is_camel_case() {
        let result = AggregatedResult {
            data: Vec::new(),
            total_records: 0,
            has_more: false,
            current_page: 1,
            total_pages: 0,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"data": [], "totalRecords": 0, "hasMore": false, "currentPage": 1, "totalPages": 0})
        );
    }

    #[test]
    fn test_sort_order_strings() {
        assert_eq!(SortOrder::Asc.to_string(), "asc");
        assert_eq!(serde_json::to_value(SortOrder::Desc).unwrap(), json!("desc"));
    }
}
