//! A logged meal with its macronutrient breakdown.

use super::{Entity, RecordFilter, UNSAVED_ID};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Food family of a meal. Parsing is case-insensitive; unknown names become `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FoodFamily {
    #[default]
    Mixed,
    Fruit,
    Meat,
    Vegetable,
    Dairy,
}

impl FoodFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodFamily::Mixed => "Mixed",
            FoodFamily::Fruit => "Fruit",
            FoodFamily::Meat => "Meat",
            FoodFamily::Vegetable => "Vegetable",
            FoodFamily::Dairy => "Dairy",
        }
    }
}

impl fmt::Display for FoodFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FoodFamily {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "fruit" => FoodFamily::Fruit,
            "meat" => FoodFamily::Meat,
            "vegetable" => FoodFamily::Vegetable,
            "dairy" => FoodFamily::Dairy,
            _ => FoodFamily::Mixed,
        }
    }
}

impl From<String> for FoodFamily {
    fn from(s: String) -> Self {
        FoodFamily::from(s.as_str())
    }
}

impl From<FoodFamily> for String {
    fn from(family: FoodFamily) -> Self {
        family.as_str().to_string()
    }
}

/// Macronutrient selector for [`Nutrition::macro_ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
    Carbs,
    Protein,
    Fat,
}

impl FromStr for Macro {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "carbs" => Ok(Macro::Carbs),
            "protein" => Ok(Macro::Protein),
            "fat" => Ok(Macro::Fat),
            other => Err(format!("unknown macronutrient '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Nutrition {
    #[serde(default)]
    pub nutrition_id: i32,
    #[serde(default)]
    #[sqlx(try_from = "String")]
    pub family: FoodFamily,
    /// Millilitres.
    #[serde(default)]
    pub water: f64,
    /// Grams, as are the other macros.
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub sugar: f64,
    pub meal_date: NaiveDate,
    #[serde(skip, default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(skip, default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Nutrition {
    pub fn new(
        family: FoodFamily,
        water: f64,
        carbs: f64,
        fat: f64,
        protein: f64,
        sugar: f64,
        meal_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            nutrition_id: UNSAVED_ID,
            family,
            water,
            carbs,
            fat,
            protein,
            sugar,
            meal_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Energy from carbs, protein and fat in kcal. Sugar is counted within carbs.
    pub fn total_calories(&self) -> f64 {
        self.carbs * KCAL_PER_GRAM_CARBS + self.protein * KCAL_PER_GRAM_PROTEIN + self.fat * KCAL_PER_GRAM_FAT
    }

    /// Share of total calories (percent) contributed by one macronutrient; 0 when there are no calories.
    pub fn macro_ratio(&self, which: Macro) -> f64 {
        let total = self.total_calories();
        if total == 0.0 {
            return 0.0;
        }
        let kcal = match which {
            Macro::Carbs => self.carbs * KCAL_PER_GRAM_CARBS,
            Macro::Protein => self.protein * KCAL_PER_GRAM_PROTEIN,
            Macro::Fat => self.fat * KCAL_PER_GRAM_FAT,
        };
        kcal / total * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "Nutrition[ID={}, Family={}, Date={}, Calories={}]",
            self.nutrition_id,
            self.family,
            self.meal_date,
            self.total_calories()
        )
    }
}

impl fmt::Display for Nutrition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Nutrition Information ===")?;
        writeln!(f, "ID: {}", self.nutrition_id)?;
        writeln!(f, "Family: {}", self.family)?;
        writeln!(f, "Date: {}", self.meal_date)?;
        writeln!(f, "Water: {} ml", self.water)?;
        writeln!(f, "Carbs: {} g", self.carbs)?;
        writeln!(f, "Fat: {} g", self.fat)?;
        writeln!(f, "Protein: {} g", self.protein)?;
        writeln!(f, "Sugar: {} g", self.sugar)?;
        write!(f, "Total Calories: {}", self.total_calories())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NutritionFilter {
    Date(NaiveDate),
    Family(FoodFamily),
}

impl RecordFilter<Nutrition> for NutritionFilter {
    fn matches(&self, record: &Nutrition) -> bool {
        match self {
            NutritionFilter::Date(date) => record.meal_date == *date,
            NutritionFilter::Family(family) => record.family == *family,
        }
    }
}

impl Entity for Nutrition {
    const KIND: &'static str = "Nutrition";
    type Filter = NutritionFilter;

    fn id(&self) -> i32 {
        self.nutrition_id
    }

    fn set_id(&mut self, id: i32) {
        self.nutrition_id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    fn listing_order(a: &Self, b: &Self) -> Ordering {
        b.meal_date
            .cmp(&a.meal_date)
            .then_with(|| a.nutrition_id.cmp(&b.nutrition_id))
    }
}
