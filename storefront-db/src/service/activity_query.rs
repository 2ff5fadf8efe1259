use chrono::{DateTime, Utc};
use std::sync::Arc;

use storefront_api::error::{CoreError, CoreResult};

use crate::models::audit::{ActivityLogFilter, ActivityLogModel};
use crate::repository::activity_log_repository::ActivityLogRepository;
use crate::repository::pagination::{Page, PageRequest};

/// CSV column header, fixed for compatibility with the legacy export.
const CSV_HEADER: &str =
    "ID,User ID,Username,Role,Action,Entity,Entity ID,Description,IP Address,Timestamp";

/// Read side of the activity log: filtered listing, facet values for the
/// filter dropdowns, and the tabular export.
pub struct ActivityLogQuery {
    repo: Arc<dyn ActivityLogRepository>,
}

impl ActivityLogQuery {
    pub fn new(repo: Arc<dyn ActivityLogRepository>) -> Self {
        Self { repo }
    }

    /// Entries passing the filter, newest first (ties broken by id,
    /// descending). An inverted date range yields an empty result, not an
    /// error.
    pub async fn find(&self, filter: &ActivityLogFilter) -> CoreResult<Vec<ActivityLogModel>> {
        self.repo
            .find_with_filters(filter)
            .await
            .map_err(|err| CoreError::DatabaseError(err.to_string()))
    }

    /// One page of the filtered listing, newest first, with the total match
    /// count for rendering the pager.
    pub async fn find_page(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> CoreResult<Page<ActivityLogModel>> {
        self.repo
            .find_page(filter, page)
            .await
            .map_err(|err| CoreError::DatabaseError(err.to_string()))
    }

    /// The `limit` most recent entries across the whole log, for dashboard
    /// widgets.
    pub async fn find_recent(&self, limit: usize) -> CoreResult<Vec<ActivityLogModel>> {
        let page = self
            .find_page(&ActivityLogFilter::new(), PageRequest::new(limit, 0))
            .await?;
        Ok(page.items)
    }

    pub async fn count(&self, filter: &ActivityLogFilter) -> CoreResult<u64> {
        self.repo
            .count(filter)
            .await
            .map_err(|err| CoreError::DatabaseError(err.to_string()))
    }

    /// Distinct action tokens present in the store, for the filter UI.
    pub async fn actions(&self) -> CoreResult<Vec<String>> {
        self.repo
            .distinct_actions()
            .await
            .map_err(|err| CoreError::DatabaseError(err.to_string()))
    }

    /// Distinct entity labels present in the store, for the filter UI.
    pub async fn entities(&self) -> CoreResult<Vec<String>> {
        self.repo
            .distinct_entities()
            .await
            .map_err(|err| CoreError::DatabaseError(err.to_string()))
    }

    /// Serialize the filtered result set to the fixed-column CSV layout.
    ///
    /// The layout is kept byte-compatible with the legacy export: optional
    /// columns render as `N/A` (username as `System`), only the description
    /// is quoted, embedded quotes are doubled.
    pub async fn export_csv(&self, filter: &ActivityLogFilter) -> CoreResult<Vec<u8>> {
        let rows = self.find(filter).await?;

        let mut csv = String::with_capacity(64 + rows.len() * 96);
        csv.push_str(CSV_HEADER);
        csv.push('\n');

        for row in &rows {
            let user_id = row
                .user_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let username = row.username.as_deref().unwrap_or("System");
            let role = row.role.map(|r| r.as_str()).unwrap_or("N/A");
            let entity = row.entity.as_deref().unwrap_or("N/A");
            let entity_id = row
                .entity_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let description = row.description.as_deref().unwrap_or("").replace('"', "\"\"");
            let ip_address = row.ip_address.as_deref().unwrap_or("N/A");
            let timestamp = row.created_at.format("%Y-%m-%d %H:%M:%S");

            csv.push_str(&format!(
                "{},{},{},{},{},{},{},\"{}\",{},{}\n",
                row.id,
                user_id,
                username,
                role,
                row.action.as_str(),
                entity,
                entity_id,
                description,
                ip_address,
                timestamp,
            ));
        }

        Ok(csv.into_bytes())
    }

    /// Attachment name for the export download: `activity_logs_<timestamp>.csv`.
    pub fn export_filename(now: DateTime<Utc>) -> String {
        format!("activity_logs_{}.csv", now.format("%Y-%m-%d_%H%M%S"))
    }
}
