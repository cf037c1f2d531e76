//! A piece of gym equipment.

use super::{Entity, RecordFilter, UNSAVED_ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Equipment {
    #[serde(default)]
    pub equipment_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Muscle or goal the equipment targets.
    #[serde(default)]
    pub target: String,
    #[serde(skip, default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(skip, default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Equipment {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            equipment_id: UNSAVED_ID,
            name: name.into(),
            description: description.into(),
            category: category.into(),
            target: target.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True when the category mentions "cardio" in any letter case.
    pub fn is_cardio(&self) -> bool {
        self.category.to_lowercase().contains("cardio")
    }

    pub fn summary(&self) -> String {
        format!(
            "Equipment[ID={}, Name={}, Category={}, Target={}]",
            self.equipment_id, self.name, self.category, self.target
        )
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Equipment Information ===")?;
        writeln!(f, "ID: {}", self.equipment_id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Category: {}", self.category)?;
        write!(f, "Target: {}", self.target)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EquipmentFilter {
    Category(String),
    Name(String),
}

impl RecordFilter<Equipment> for EquipmentFilter {
    fn matches(&self, record: &Equipment) -> bool {
        match self {
            EquipmentFilter::Category(category) => record.category == *category,
            EquipmentFilter::Name(name) => record.name == *name,
        }
    }
}

impl Entity for Equipment {
    const KIND: &'static str = "Equipment";
    type Filter = EquipmentFilter;

    fn id(&self) -> i32 {
        self.equipment_id
    }

    fn set_id(&mut self, id: i32) {
        self.equipment_id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    fn listing_order(a: &Self, b: &Self) -> Ordering {
        a.name
            .cmp(&b.name)
            .then_with(|| a.equipment_id.cmp(&b.equipment_id))
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}
