use tracing::{debug, instrument, warn};
use zoho_client::TokenProvider;

use crate::error::Result;
use crate::record::{AggregatedResult, AllRecordsOptions, ListOptions};

/// Page fetches one pagination run may issue.
pub const MAX_PAGE_FETCHES: u32 = 50;

impl<P: TokenProvider> super::PeopleClient<P> {
    /// Fetch consecutive pages of a module until the data runs out.
    ///
    /// A page shorter than the page size ends the run; a full page means more
    /// may follow, so a last page that is exactly full costs one extra, empty
    /// fetch. Requests after the first are paced by the configured delay
    /// schedule. The run stops early at `max_records` or after
    /// [`MAX_PAGE_FETCHES`] fetches; the latter is logged, not an error.
    ///
    /// Any failed page fails the whole run.
    #[instrument(skip(self, options))]
    pub async fn get_all_records(
        &self,
        module: &str,
        options: &AllRecordsOptions,
    ) -> Result<AggregatedResult> {
        let pagination = self.pagination();
        let start_page = options.page.unwrap_or(1).max(1);
        let per_page = pagination.clamp_page_size(options.per_page);
        let max_records = options
            .max_records
            .unwrap_or(pagination.max_records_per_batch);
        let schedule = pagination.rate_limit_schedule();

        let mut data = Vec::new();
        let mut page = start_page;
        let mut current_page = start_page;
        let mut has_more = false;
        let mut fetches = 0u32;

        while data.len() < max_records {
            if fetches >= MAX_PAGE_FETCHES {
                warn!(
                    module,
                    fetches,
                    records = data.len(),
                    "Stopping pagination at the page fetch limit"
                );
                break;
            }

            if let Some(delay) = schedule.delay_before(fetches).filter(|d| !d.is_zero()) {
                debug!(delay_ms = delay.as_millis() as u64, page, "Pacing next page fetch");
                tokio::time::sleep(delay).await;
            }

            let list = ListOptions {
                fields: options.fields.clone(),
                page: Some(page),
                per_page: Some(per_page),
                sort_by: options.sort_by.clone(),
                sort_order: options.sort_order,
            };
            let result = self.get_records(module, &list).await?;
            fetches += 1;

            if result.data.is_empty() {
                has_more = false;
                break;
            }

            has_more = result.data.len() == per_page as usize;
            data.extend(result.data);
            current_page = page;

            if !has_more {
                break;
            }

            match page.checked_add(1) {
                Some(next) => page = next,
                None => {
                    warn!(module, page, "Page number exhausted, stopping pagination");
                    break;
                }
            }
        }

        data.truncate(max_records);
        let total_records = data.len();
        let total_pages = total_records.div_ceil(per_page as usize) as u32;
        debug!(total_records, fetches, has_more, "Pagination finished");

        Ok(AggregatedResult {
            data,
            total_records,
            has_more,
            current_page,
            total_pages,
        })
    }
}
