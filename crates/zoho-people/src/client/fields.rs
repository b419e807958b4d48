use serde_json::Value;
use tracing::instrument;
use zoho_client::shape::{self, extract_array};
use zoho_client::TokenProvider;

use crate::error::Result;
use crate::field::FieldDescriptor;

/// Endpoint listing the fields of `module`.
///
/// The employee and leave forms expose their components under `forms/`.
fn fields_path(module: &str) -> String {
    match module {
        "employees" => "forms/employee/components".to_string(),
        "leave" => "forms/leave/components".to_string(),
        other => format!("{other}/fields"),
    }
}

impl<P: TokenProvider> super::PeopleClient<P> {
    /// Describe the fields of a module.
    ///
    /// Upstream type names are normalized; see [`DataType`](crate::DataType).
    #[instrument(skip(self))]
    pub async fn get_fields(&self, module: &str) -> Result<Vec<FieldDescriptor>> {
        super::validate_module(module)?;

        let body: Value = self
            .client
            .get_json(&fields_path(module), &[])
            .await
            .map_err(|e| e.context(format!("Failed to get fields for module {module}")))?;

        Ok(extract_array(body, shape::FIELDS)
            .iter()
            .filter_map(FieldDescriptor::from_upstream)
            .collect())
    }
}
