use async_trait::async_trait;

use crate::models::audit::{ActivityLogFilter, ActivityLogModel, NewActivityLog};
use crate::repository::pagination::{Page, PageRequest};

/// Storage surface for the append-only activity log.
///
/// Deliberately narrow: there is no update or delete operation, so the
/// append-only invariant is enforced by the type system rather than by
/// convention. Retention and archival live outside the application.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Append exactly one entry and return it with its store-assigned id.
    async fn append(
        &self,
        entry: NewActivityLog,
    ) -> Result<ActivityLogModel, Box<dyn std::error::Error + Send + Sync>>;

    /// Entries passing the filter, ordered `created_at DESC, id DESC`
    /// (most-recently-created first, deterministic on ties).
    async fn find_with_filters(
        &self,
        filter: &ActivityLogFilter,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// One page of entries passing the filter, same ordering as
    /// `find_with_filters`, with the total match count for the pager.
    async fn find_page(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> Result<Page<ActivityLogModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Number of entries passing the filter.
    async fn count(
        &self,
        filter: &ActivityLogFilter,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;

    /// Distinct action tokens present in the store, ascending lexical order.
    async fn distinct_actions(
        &self,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Distinct non-null entity labels, ascending lexical order.
    async fn distinct_entities(
        &self,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;
}
