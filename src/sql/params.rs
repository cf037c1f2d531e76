//! Typed values that sqlx can bind to a PostgreSQL placeholder.

use chrono::{NaiveDate, NaiveTime};
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// One bound parameter. Each variant reports its own PostgreSQL type, so NULLs stay typed.
#[derive(Clone, Debug, PartialEq)]
pub enum PgBindValue {
    Int(i32),
    NullInt,
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl From<i32> for PgBindValue {
    fn from(n: i32) -> Self {
        PgBindValue::Int(n)
    }
}

impl From<Option<i32>> for PgBindValue {
    fn from(n: Option<i32>) -> Self {
        n.map(PgBindValue::Int).unwrap_or(PgBindValue::NullInt)
    }
}

impl From<f64> for PgBindValue {
    fn from(n: f64) -> Self {
        PgBindValue::Float(n)
    }
}

impl From<&str> for PgBindValue {
    fn from(s: &str) -> Self {
        PgBindValue::Text(s.to_string())
    }
}

impl From<String> for PgBindValue {
    fn from(s: String) -> Self {
        PgBindValue::Text(s)
    }
}

impl From<NaiveDate> for PgBindValue {
    fn from(d: NaiveDate) -> Self {
        PgBindValue::Date(d)
    }
}

impl From<NaiveTime> for PgBindValue {
    fn from(t: NaiveTime) -> Self {
        PgBindValue::Time(t)
    }
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            PgBindValue::Int(n) => <i32 as Encode<Postgres>>::encode_by_ref(n, buf),
            PgBindValue::NullInt => <Option<i32> as Encode<Postgres>>::encode_by_ref(&None, buf),
            PgBindValue::Float(n) => <f64 as Encode<Postgres>>::encode_by_ref(n, buf),
            PgBindValue::Text(s) => <String as Encode<Postgres>>::encode_by_ref(s, buf),
            PgBindValue::Date(d) => <NaiveDate as Encode<Postgres>>::encode_by_ref(d, buf),
            PgBindValue::Time(t) => <NaiveTime as Encode<Postgres>>::encode_by_ref(t, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            PgBindValue::Int(_) | PgBindValue::NullInt => <i32 as Type<Postgres>>::type_info(),
            PgBindValue::Float(_) => <f64 as Type<Postgres>>::type_info(),
            PgBindValue::Text(_) => <String as Type<Postgres>>::type_info(),
            PgBindValue::Date(_) => <NaiveDate as Type<Postgres>>::type_info(),
            PgBindValue::Time(_) => <NaiveTime as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_reference_binds_as_typed_null() {
        assert_eq!(PgBindValue::from(None::<i32>), PgBindValue::NullInt);
        assert_eq!(PgBindValue::from(Some(4)), PgBindValue::Int(4));
        assert_eq!(
            PgBindValue::NullInt.produces(),
            Some(<i32 as Type<Postgres>>::type_info())
        );
    }
}
