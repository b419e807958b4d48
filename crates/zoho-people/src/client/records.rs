use serde_json::Value;
use tracing::instrument;
use zoho_client::shape::{self, extract_array};
use zoho_client::TokenProvider;

use crate::error::Result;
use crate::record::{records_from, ListOptions, PageInfo, PaginatedResult, SearchOptions};

impl<P: TokenProvider> super::PeopleClient<P> {
    /// Search the records of a module.
    ///
    /// An empty `criteria` searches without a filter. `more_records` is always
    /// false; callers infer continuation from a full page.
    #[instrument(skip(self, options))]
    pub async fn search_records(
        &self,
        module: &str,
        criteria: &str,
        options: &SearchOptions,
    ) -> Result<PaginatedResult> {
        super::validate_module(module)?;

        let (mut query, page, per_page) = super::page_query(
            self.pagination(),
            options.fields.as_deref(),
            options.page,
            options.per_page,
        );
        if !criteria.trim().is_empty() {
            query.insert(0, ("criteria".to_string(), criteria.to_string()));
        }

        self.fetch_page(&format!("forms/{module}/search"), &query, page, per_page)
            .await
            .map_err(|e| e.context(format!("Failed to search records in module {module}")))
    }

    /// Fetch one page of records of a module.
    #[instrument(skip(self, options))]
    pub async fn get_records(&self, module: &str, options: &ListOptions) -> Result<PaginatedResult> {
        super::validate_module(module)?;

        let (mut query, page, per_page) = super::page_query(
            self.pagination(),
            options.fields.as_deref(),
            options.page,
            options.per_page,
        );
        if let Some(sort_by) = options.sort_by.as_deref().filter(|s| !s.is_empty()) {
            query.push(("sort_by".to_string(), sort_by.to_string()));
        }
        if let Some(order) = options.sort_order {
            query.push(("sort_order".to_string(), order.as_str().to_string()));
        }

        self.fetch_page(&format!("forms/{module}/getRecords"), &query, page, per_page)
            .await
            .map_err(|e| e.context(format!("Failed to get records from module {module}")))
    }

    async fn fetch_page(
        &self,
        path: &str,
        query: &[(String, String)],
        page: u32,
        per_page: u32,
    ) -> Result<PaginatedResult> {
        let body: Value = self.client.get_json(path, query).await?;
        let data = records_from(extract_array(body, shape::RECORDS));

        Ok(PaginatedResult {
            info: PageInfo {
                page,
                per_page,
                count: data.len(),
                more_records: false,
            },
            data,
        })
    }
}
