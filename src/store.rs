//! Pool construction and table DDL for the PostgreSQL backend.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;

/// Build a pool without connecting. Connections are opened on first use, checked
/// before every acquire, and replaced when they have gone away.
pub fn connect_lazy(settings: &Settings) -> Result<PgPool, AppError> {
    let options = PgConnectOptions::from_str(&settings.database_url)?;
    let pool = PgPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .acquire_timeout(settings.db_acquire_timeout)
        .test_before_acquire(true)
        .connect_lazy_with(options);
    Ok(pool)
}

const TABLES: &[(&str, &str)] = &[
    (
        "muscle_group",
        r#"
        CREATE TABLE IF NOT EXISTS "muscle_group" (
            "muscle_group_id" SERIAL PRIMARY KEY,
            "name" TEXT NOT NULL UNIQUE,
            "description" TEXT NOT NULL DEFAULT '',
            "days_per_week" INTEGER NOT NULL,
            "sets" INTEGER NOT NULL,
            "reps" INTEGER NOT NULL,
            "weight_amount" DOUBLE PRECISION NOT NULL,
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            "updated_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "workout",
        r#"
        CREATE TABLE IF NOT EXISTS "workout" (
            "workout_id" SERIAL PRIMARY KEY,
            "workout_date" DATE NOT NULL,
            "workout_time" TIME NOT NULL,
            "duration" INTEGER NOT NULL,
            "type_description" TEXT NOT NULL DEFAULT '',
            "calories_burned" DOUBLE PRECISION NOT NULL,
            "rate_perceived_exhaustion" INTEGER NOT NULL,
            "muscle_group_id" INTEGER,
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            "updated_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "nutrition",
        r#"
        CREATE TABLE IF NOT EXISTS "nutrition" (
            "nutrition_id" SERIAL PRIMARY KEY,
            "family" TEXT NOT NULL DEFAULT 'Mixed',
            "water" DOUBLE PRECISION NOT NULL DEFAULT 0,
            "carbs" DOUBLE PRECISION NOT NULL DEFAULT 0,
            "fat" DOUBLE PRECISION NOT NULL DEFAULT 0,
            "protein" DOUBLE PRECISION NOT NULL DEFAULT 0,
            "sugar" DOUBLE PRECISION NOT NULL DEFAULT 0,
            "meal_date" DATE NOT NULL,
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            "updated_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "recovery",
        r#"
        CREATE TABLE IF NOT EXISTS "recovery" (
            "recovery_id" SERIAL PRIMARY KEY,
            "recovery_date" DATE NOT NULL,
            "duration" INTEGER NOT NULL,
            "type" TEXT NOT NULL,
            "helpers" TEXT NOT NULL DEFAULT '',
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            "updated_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "equipment",
        r#"
        CREATE TABLE IF NOT EXISTS "equipment" (
            "equipment_id" SERIAL PRIMARY KEY,
            "name" TEXT NOT NULL UNIQUE,
            "description" TEXT NOT NULL DEFAULT '',
            "category" TEXT NOT NULL DEFAULT '',
            "target" TEXT NOT NULL DEFAULT '',
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            "updated_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
];

/// Create the five record tables if they do not exist. Existing tables are left untouched.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table = %name, "table ensured");
    }
    // Listing order indexes. workout.muscle_group_id has no FK constraint.
    sqlx::query(r#"CREATE INDEX IF NOT EXISTS "workout_date_idx" ON "workout" ("workout_date" DESC, "workout_time" DESC)"#)
        .execute(pool)
        .await?;
    sqlx::query(r#"CREATE INDEX IF NOT EXISTS "nutrition_meal_date_idx" ON "nutrition" ("meal_date" DESC)"#)
        .execute(pool)
        .await?;
    sqlx::query(r#"CREATE INDEX IF NOT EXISTS "recovery_date_idx" ON "recovery" ("recovery_date" DESC)"#)
        .execute(pool)
        .await?;
    Ok(())
}
