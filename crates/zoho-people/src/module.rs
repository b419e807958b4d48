//! Module (form) descriptors.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::lookup::{first_bool, first_str};

/// An operation a module supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

/// Capability flags of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub creatable: bool,
    pub deletable: bool,
    pub editable: bool,
    pub viewable: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            creatable: true,
            deletable: false,
            editable: true,
            viewable: true,
        }
    }
}

impl Capabilities {
    /// Read and create only.
    pub const READ_CREATE: Capabilities = Capabilities {
        creatable: true,
        deletable: false,
        editable: false,
        viewable: true,
    };

    /// The operations these flags allow.
    pub fn operations(&self) -> BTreeSet<Operation> {
        [
            (self.viewable, Operation::Read),
            (self.creatable, Operation::Create),
            (self.editable, Operation::Update),
            (self.deletable, Operation::Delete),
        ]
        .into_iter()
        .filter_map(|(allowed, op)| allowed.then_some(op))
        .collect()
    }

    fn from_upstream(obj: &serde_json::Map<String, Value>) -> Self {
        let defaults = Self::default();
        let permissions = obj.get("PermissionDetails").and_then(Value::as_object);
        let permission = |key: &str| {
            permissions
                .and_then(|p| p.get(key))
                .and_then(Value::as_f64)
                .map(|level| level > 0.0)
        };

        Self {
            creatable: first_bool(obj, &["creatable", "isCreatable"])
                .or_else(|| permission("Add"))
                .unwrap_or(defaults.creatable),
            deletable: first_bool(obj, &["deletable", "isDeletable"])
                .or_else(|| permission("Delete"))
                .unwrap_or(defaults.deletable),
            editable: first_bool(obj, &["editable", "isEditable"])
                .or_else(|| permission("Edit"))
                .unwrap_or(defaults.editable),
            viewable: first_bool(obj, &["viewable", "isViewable"])
                .or_else(|| permission("View"))
                .unwrap_or(defaults.viewable),
        }
    }
}

/// A People module such as `employees` or `leave`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub api_name: String,
    pub display_name: String,
    pub plural_label: String,
    pub singular_label: String,
    pub supported_operations: BTreeSet<Operation>,
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

impl ModuleDescriptor {
    /// Create a descriptor whose labels equal the display name.
    pub fn new(
        api_name: impl Into<String>,
        display_name: impl Into<String>,
        capabilities: Capabilities,
    ) -> Self {
        let display_name = display_name.into();
        Self {
            api_name: api_name.into(),
            plural_label: display_name.clone(),
            singular_label: display_name.clone(),
            display_name,
            supported_operations: capabilities.operations(),
            capabilities,
        }
    }

    /// Override the plural and singular labels.
    pub fn with_labels(mut self, plural: impl Into<String>, singular: impl Into<String>) -> Self {
        self.plural_label = plural.into();
        self.singular_label = singular.into();
        self
    }

    /// Returns true if the module allows `op`.
    pub fn supports(&self, op: Operation) -> bool {
        self.supported_operations.contains(&op)
    }

    /// Map one entry of the upstream form list.
    ///
    /// Returns `None` when no API name can be found.
    pub(crate) fn from_upstream(value: &Value) -> Option<Self> {
        let Some(obj) = value.as_object() else {
            debug!("Skipping non-object module entry");
            return None;
        };

        let Some(api_name) = first_str(obj, &["form_name", "linkName", "formLinkName", "api_name"])
        else {
            debug!(keys = ?obj.keys().collect::<Vec<_>>(), "Skipping module entry without an API name");
            return None;
        };

        let display_name = first_str(obj, &["display_name", "displayName", "form_name"])
            .unwrap_or_else(|| api_name.clone());
        let plural = first_str(obj, &["plural_label", "pluralLabel"])
            .unwrap_or_else(|| display_name.clone());
        let singular = first_str(obj, &["singular_label", "singularLabel"])
            .unwrap_or_else(|| display_name.clone());

        Some(
            Self::new(api_name, display_name, Capabilities::from_upstream(obj))
                .with_labels(plural, singular),
        )
    }
}

/// Well-known modules that upstream form lists sometimes omit.
pub fn fallback_modules() -> Vec<ModuleDescriptor> {
    vec![
        ModuleDescriptor::new("employees", "Employees", Capabilities::default())
            .with_labels("Employees", "Employee"),
        ModuleDescriptor::new("departments", "Departments", Capabilities::default())
            .with_labels("Departments", "Department"),
        ModuleDescriptor::new("designations", "Designations", Capabilities::default())
            .with_labels("Designations", "Designation"),
        ModuleDescriptor::new("leave", "Leave", Capabilities::default())
            .with_labels("Leave Requests", "Leave Request"),
        ModuleDescriptor::new("attendance", "Attendance", Capabilities::READ_CREATE)
            .with_labels("Attendance Records", "Attendance Record"),
        ModuleDescriptor::new("timelogs", "Time Logs", Capabilities::READ_CREATE)
            .with_labels("Time Logs", "Time Log"),
    ]
}

/// Append fallback modules whose API name was not fetched.
///
/// Matching is exact and case-sensitive; fetched entries keep their order.
pub(crate) fn merge_with_fallback(mut fetched: Vec<ModuleDescriptor>) -> Vec<ModuleDescriptor> {
    let known: HashSet<String> = fetched.iter().map(|m| m.api_name.clone()).collect();
    fetched.extend(
        fallback_modules()
            .into_iter()
            .filter(|m| !known.contains(&m.api_name)),
    );
    fetched
}
