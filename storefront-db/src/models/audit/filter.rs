use chrono::{DateTime, NaiveDate, Utc};

/// Filter options for the activity log listing and export.
///
/// Every field is optional; unset means unrestricted. Set fields combine
/// with logical AND. Callers supply calendar dates; the `date_to` bound is
/// normalized to 23:59:59 of that day so a date-only filter still captures
/// the whole day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLogFilter {
    /// Restrict to entries attributed to this actor id
    pub user_id: Option<i64>,
    /// Exact match on the action token
    pub action: Option<String>,
    /// Exact match on the entity label
    pub entity: Option<String>,
    /// Entries created at or after the start of this day (UTC)
    pub date_from: Option<NaiveDate>,
    /// Entries created at or before 23:59:59 of this day (UTC)
    pub date_to: Option<NaiveDate>,
}

impl ActivityLogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Lower bound: start of `date_from` in UTC.
    pub fn date_from_bound(&self) -> Option<DateTime<Utc>> {
        self.date_from
            .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is always valid").and_utc())
    }

    /// Upper bound: `date_to` at 23:59:59 in UTC (end-of-day normalization).
    pub fn date_to_bound(&self) -> Option<DateTime<Utc>> {
        self.date_to
            .map(|d| d.and_hms_opt(23, 59, 59).expect("23:59:59 is always valid").and_utc())
    }

    /// Whether an entry with the given fields passes this filter.
    ///
    /// Shared by the in-memory backend; the postgres backend compiles the
    /// same conditions into SQL.
    pub fn matches(
        &self,
        user_id: Option<i64>,
        action: &str,
        entity: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> bool {
        if let Some(want) = self.user_id {
            if user_id != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.action.as_deref() {
            if action != want {
                return false;
            }
        }
        if let Some(want) = self.entity.as_deref() {
            if entity != Some(want) {
                return false;
            }
        }
        if let Some(from) = self.date_from_bound() {
            if created_at < from {
                return false;
            }
        }
        if let Some(to) = self.date_to_bound() {
            if created_at > to {
                return false;
            }
        }
        true
    }
}
