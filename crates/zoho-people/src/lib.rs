//! # zoho-people
//!
//! Zoho People REST API client.
//!
//! ## Features
//!
//! - **Module discovery** - upstream forms merged with well-known modules
//! - **Field discovery** - normalized data types and picklist options
//! - **Record search and listing** - one page at a time, page size capped at 200
//! - **Full pagination** - paced, capped page loops
//! - **Timelines** - per-record activity, never failing the caller
//!
//! ## Example
//!
//! ```rust,ignore
//! use zoho_people::{AllRecordsOptions, PeopleClient, TimelineOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zoho_people::Error> {
//!     let client = PeopleClient::from_env()?;
//!
//!     for module in client.get_modules().await? {
//!         println!("{} ({})", module.display_name, module.api_name);
//!     }
//!
//!     let all = client
//!         .get_all_records("employee", &AllRecordsOptions::default().with_max_records(500))
//!         .await?;
//!     println!("{} employees, more: {}", all.total_records, all.has_more);
//!
//!     let timeline = client
//!         .get_timeline("employee", &all.data[0].id, &TimelineOptions::default())
//!         .await;
//!     if let Some(warning) = timeline.warning {
//!         eprintln!("{warning}");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod field;
mod lookup;
mod module;
mod record;
mod timeline;

pub use client::{PeopleClient, MAX_PAGE_FETCHES};
pub use error::{Error, ErrorKind, Result};
pub use field::{DataType, FieldDescriptor, PicklistOption};
pub use module::{fallback_modules, Capabilities, ModuleDescriptor, Operation};
pub use record::{
    AggregatedResult, AllRecordsOptions, ListOptions, PageInfo, PaginatedResult, Record,
    SearchOptions, SortOrder,
};
pub use timeline::{TimelineOptions, TimelineResult};
