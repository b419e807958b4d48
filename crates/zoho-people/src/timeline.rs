//! Record timeline types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::PageInfo;

/// Options for [`get_timeline`](crate::PeopleClient::get_timeline).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineOptions {
    pub timeline_types: Option<Vec<String>>,
    pub include_inner_details: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl TimelineOptions {
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timeline_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_inner_details(mut self, include: bool) -> Self {
        self.include_inner_details = Some(include);
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

/// Activity entries of one record.
///
/// A timeline that could not be fetched is empty and carries a `warning`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineResult {
    pub timeline: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<PageInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl TimelineResult {
    /// An empty timeline annotated with `warning`.
    pub fn unavailable(warning: impl Into<String>) -> Self {
        Self {
            timeline: Vec::new(),
            info: None,
            warning: Some(warning.into()),
        }
    }

    /// Returns true if the timeline could not be fetched.
    pub fn is_unavailable(&self) -> bool {
        self.warning.is_some()
    }
}
