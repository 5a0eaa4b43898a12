// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::session_revocation::SessionRevocationStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

const KEY_PREFIX: &str = "revoked:session:";

/// Revocation list shared between instances through Redis.
///
/// Markers expire after `retention`, which should be at least the token
/// lifetime; a revoked token cannot outlive its own expiry anyway.
#[derive(Clone)]
pub struct RedisSessionRevocationStore {
    pool: Pool,
    retention: Option<Duration>,
}

fn infra(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("redis: {err}"))
}

fn revoked_key(session_id: &str) -> String {
    format!("{KEY_PREFIX}{session_id}")
}

impl RedisSessionRevocationStore {
    /// Create a store from a redis URL such as `redis://:password@host:6379/0`.
    pub fn from_url(url: &str, retention: Option<Duration>) -> ApplicationResult<Self> {
        let pool = DeadpoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(infra)?;

        Ok(Self { pool, retention })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool.get().await.map_err(infra)
    }
}

#[async_trait]
impl SessionRevocationStore for RedisSessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        let mut conn = self.connection().await?;
        conn.exists(revoked_key(session_id)).await.map_err(infra)
    }

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        let mut cmd = redis::cmd("SET");
        cmd.arg(revoked_key(session_id)).arg(1);
        if let Some(retention) = self.retention {
            cmd.arg("EX").arg(retention.as_secs().max(1));
        }
        cmd.query_async::<()>(&mut conn).await.map_err(infra)
    }
}
