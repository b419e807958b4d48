//! Field descriptors and data-type normalization.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::lookup::{first_bool, first_present, first_str, first_u32};

/// Normalized field data type.
///
/// Upstream type names are folded through a fixed table; names outside the
/// table are kept lowercased in [`DataType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    Text,
    Textarea,
    Email,
    Phone,
    Date,
    Datetime,
    Integer,
    Decimal,
    Boolean,
    Picklist,
    Lookup,
    MultiSelectPicklist,
    Other(String),
}

impl DataType {
    /// Normalize an upstream type name.
    pub fn normalize(upstream: &str) -> Self {
        let lowered = upstream.trim().to_lowercase();
        match lowered.as_str() {
            "singleline" | "text" | "string" => DataType::Text,
            "multiline" | "textarea" | "richtext" => DataType::Textarea,
            "email" => DataType::Email,
            "phone" | "mobile" => DataType::Phone,
            "date" => DataType::Date,
            "datetime" => DataType::Datetime,
            "number" | "integer" | "autonumber" => DataType::Integer,
            "decimal" | "currency" | "percent" | "formula" => DataType::Decimal,
            "boolean" | "checkbox" | "decision" => DataType::Boolean,
            "picklist" | "dropdown" | "radio" => DataType::Picklist,
            "lookup" => DataType::Lookup,
            "multiselect" | "multiselectpicklist" | "multi_select" => DataType::MultiSelectPicklist,
            _ => DataType::Other(lowered),
        }
    }

    /// The normalized name.
    pub fn as_str(&self) -> &str {
        match self {
            DataType::Text => "text",
            DataType::Textarea => "textarea",
            DataType::Email => "email",
            DataType::Phone => "phone",
            DataType::Date => "date",
            DataType::Datetime => "datetime",
            DataType::Integer => "integer",
            DataType::Decimal => "decimal",
            DataType::Boolean => "boolean",
            DataType::Picklist => "picklist",
            DataType::Lookup => "lookup",
            DataType::MultiSelectPicklist => "multiselectpicklist",
            DataType::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for DataType {
    fn from(value: String) -> Self {
        DataType::normalize(&value)
    }
}

impl From<DataType> for String {
    fn from(value: DataType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One allowed value of a picklist field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PicklistOption {
    pub id: Option<String>,
    pub display_value: String,
    pub actual_value: String,
}

impl PicklistOption {
    fn from_upstream(value: &Value) -> Self {
        match value.as_object() {
            Some(obj) => {
                let display_value =
                    first_str(obj, &["display_value", "displayValue", "Value"]).unwrap_or_default();
                let actual_value = first_str(obj, &["actual_value", "actualValue", "Value"])
                    .unwrap_or_else(|| display_value.clone());
                Self {
                    id: first_str(obj, &["id", "Id"]),
                    display_value,
                    actual_value,
                }
            }
            // Some forms list options as bare strings.
            None => {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Self {
                    id: None,
                    display_value: text.clone(),
                    actual_value: text,
                }
            }
        }
    }
}

/// Metadata describing one field of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub api_name: String,
    pub display_label: String,
    pub data_type: DataType,
    pub required: bool,
    pub read_only: bool,
    pub id: Option<String>,
    pub custom_field: bool,
    /// `None` for non-picklist fields; an empty list for a picklist without options.
    pub pick_list_values: Option<Vec<PicklistOption>>,
    pub sequence_number: Option<u32>,
}

impl FieldDescriptor {
    /// Map one entry of an upstream field list.
    pub(crate) fn from_upstream(value: &Value) -> Option<Self> {
        let Some(obj) = value.as_object() else {
            debug!("Skipping non-object field entry");
            return None;
        };

        let Some(api_name) = first_str(obj, &["field_name", "api_name", "labelname", "name"]) else {
            debug!("Skipping field entry without an API name");
            return None;
        };
        let display_label = first_str(obj, &["display_label", "displayname", "label"])
            .unwrap_or_else(|| api_name.clone());
        let data_type = first_str(obj, &["type", "data_type", "comptype"])
            .map(|t| DataType::normalize(&t))
            .unwrap_or(DataType::Text);

        let pick_list_values = match first_present(obj, &["pick_list_values", "options", "Options"])
        {
            Some(Value::Array(options)) => {
                Some(options.iter().map(PicklistOption::from_upstream).collect())
            }
            _ => None,
        };

        Some(Self {
            api_name,
            display_label,
            data_type,
            required: first_bool(obj, &["is_required", "required", "isMandatory"]).unwrap_or(false),
            read_only: first_bool(obj, &["read_only", "is_read_only", "isReadOnly"])
                .unwrap_or(false),
            id: first_str(obj, &["id", "field_id", "compid"]),
            custom_field: first_bool(obj, &["custom_field", "is_custom", "iscustom"])
                .unwrap_or(false),
            pick_list_values,
            sequence_number: first_u32(obj, &["sequence_number", "seqNo"]),
        })
    }
}
