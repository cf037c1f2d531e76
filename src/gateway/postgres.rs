//! PostgreSQL gateway over a connection pool.

use super::{Gateway, Store};
use crate::error::AppError;
use crate::sql::{self, QueryBuf, Table};
use async_trait::async_trait;
use sqlx::PgPool;

/// Runs the built statements against a pool. The pool tests each connection before
/// handing it out and replaces dead ones, so a dropped connection is re-established
/// on the next call.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_one<T: Table>(&self, q: QueryBuf) -> Result<T, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let QueryBuf { sql, params } = q;
        let mut query = sqlx::query_as::<_, T>(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    async fn fetch_optional<T: Table>(&self, q: QueryBuf) -> Result<Option<T>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let QueryBuf { sql, params } = q;
        let mut query = sqlx::query_as::<_, T>(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }

    async fn fetch_all<T: Table>(&self, q: QueryBuf) -> Result<Vec<T>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let QueryBuf { sql, params } = q;
        let mut query = sqlx::query_as::<_, T>(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn execute(&self, q: QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let QueryBuf { sql, params } = q;
        let mut query = sqlx::query(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.execute(&self.pool).await?.rows_affected())
    }
}

#[async_trait]
impl<T: Table> Gateway<T> for PgStore {
    async fn create(&self, record: &T) -> Result<T, AppError> {
        self.fetch_one(sql::insert(record)).await
    }

    async fn read_by_id(&self, id: i32) -> Result<Option<T>, AppError> {
        self.fetch_optional(sql::select_by_id::<T>(id)).await
    }

    async fn read_all(&self) -> Result<Vec<T>, AppError> {
        self.fetch_all(sql::select_all::<T>()).await
    }

    async fn read_by(&self, filter: &T::Filter) -> Result<Vec<T>, AppError> {
        self.fetch_all(sql::select_where::<T>(filter)).await
    }

    async fn update(&self, record: &T) -> Result<Option<T>, AppError> {
        self.fetch_optional(sql::update(record)).await
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.execute(sql::delete::<T>(id)).await? > 0)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
