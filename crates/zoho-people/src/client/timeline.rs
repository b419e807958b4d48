use serde_json::Value;
use tracing::{instrument, warn};
use zoho_client::security::path;
use zoho_client::shape::{self, extract_array};
use zoho_client::TokenProvider;

use crate::error::{Error, ErrorKind, Result};
use crate::record::PageInfo;
use crate::timeline::{TimelineOptions, TimelineResult};

impl<P: TokenProvider> super::PeopleClient<P> {
    /// Fetch the activity timeline of one record.
    ///
    /// Not every module has a timeline, so this never fails: any error,
    /// rate limits included, yields an empty timeline with a `warning`.
    #[instrument(skip(self, options))]
    pub async fn get_timeline(
        &self,
        module: &str,
        record_id: &str,
        options: &TimelineOptions,
    ) -> TimelineResult {
        match self.try_get_timeline(module, record_id, options).await {
            Ok(result) => result,
            Err(err) => {
                let warning = format!("Timeline not available for {module}/{record_id}: {err}");
                warn!(module, record_id, error = %err, "Timeline not available");
                TimelineResult::unavailable(warning)
            }
        }
    }

    async fn try_get_timeline(
        &self,
        module: &str,
        record_id: &str,
        options: &TimelineOptions,
    ) -> Result<TimelineResult> {
        super::validate_module(module)?;
        if record_id.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput(
                "record id is required".to_string(),
            )));
        }

        let (mut query, page, per_page) =
            super::page_query(self.pagination(), None, options.page, options.per_page);
        if let Some(types) = options.timeline_types.as_ref().filter(|t| !t.is_empty()) {
            query.push(("timeline_types".to_string(), types.join(",")));
        }
        if let Some(include) = options.include_inner_details {
            query.push(("include_inner_details".to_string(), include.to_string()));
        }

        let url = format!("{module}/{}/timeline", path::encode_segment(record_id));
        let body: Value = self.client.get_json(&url, &query).await?;
        let timeline = extract_array(body, shape::TIMELINE);

        Ok(TimelineResult {
            info: Some(PageInfo {
                page,
                per_page,
                count: timeline.len(),
                more_records: timeline.len() == per_page as usize,
            }),
            timeline,
            warning: None,
        })
    }
}
