//! HTTP handlers for record CRUD and reports.

pub mod entity;
pub mod reports;

pub use entity::Resource;

use crate::error::AppError;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::str::FromStr;

fn parse_param<T: FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid {}: '{}'", key, raw)))
}

/// Value of `key` if present, parsed.
pub(crate) fn optional_param<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Result<Option<T>, AppError> {
    params.get(key).map(|raw| parse_param(key, raw)).transpose()
}

pub(crate) fn required_date(params: &HashMap<String, String>, key: &str) -> Result<NaiveDate, AppError> {
    optional_param(params, key)?.ok_or_else(|| AppError::BadRequest(format!("missing {}", key)))
}
