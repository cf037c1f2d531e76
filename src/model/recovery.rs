//! A recovery session (stretching, sauna, massage, sleep, ...).

use super::{Entity, RecordFilter, UNSAVED_ID};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Sessions longer than this many minutes count as long.
pub const LONG_RECOVERY_MINUTES: i32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recovery {
    #[serde(default)]
    pub recovery_id: i32,
    pub recovery_date: NaiveDate,
    /// Minutes.
    pub duration: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    /// Free text: aids or tools used during the session.
    #[serde(default)]
    pub helpers: String,
    #[serde(skip, default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(skip, default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Recovery {
    pub fn new(recovery_date: NaiveDate, duration: i32, kind: impl Into<String>, helpers: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            recovery_id: UNSAVED_ID,
            recovery_date,
            duration,
            kind: kind.into(),
            helpers: helpers.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_long_recovery(&self) -> bool {
        self.duration > LONG_RECOVERY_MINUTES
    }

    pub fn summary(&self) -> String {
        format!(
            "Recovery[ID={}, Date={}, Duration={}min, Type={}]",
            self.recovery_id, self.recovery_date, self.duration, self.kind
        )
    }
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Recovery Information ===")?;
        writeln!(f, "ID: {}", self.recovery_id)?;
        writeln!(f, "Date: {}", self.recovery_date)?;
        writeln!(f, "Duration: {} minutes", self.duration)?;
        writeln!(f, "Type: {}", self.kind)?;
        write!(f, "Helpers/Aids: {}", self.helpers)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryFilter {
    Date(NaiveDate),
    Type(String),
}

impl RecordFilter<Recovery> for RecoveryFilter {
    fn matches(&self, record: &Recovery) -> bool {
        match self {
            RecoveryFilter::Date(date) => record.recovery_date == *date,
            RecoveryFilter::Type(kind) => record.kind == *kind,
        }
    }
}

impl Entity for Recovery {
    const KIND: &'static str = "Recovery";
    type Filter = RecoveryFilter;

    fn id(&self) -> i32 {
        self.recovery_id
    }

    fn set_id(&mut self, id: i32) {
        self.recovery_id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    fn listing_order(a: &Self, b: &Self) -> Ordering {
        b.recovery_date
            .cmp(&a.recovery_date)
            .then_with(|| a.recovery_id.cmp(&b.recovery_id))
    }
}
