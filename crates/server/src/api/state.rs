//! Shared application state.

use std::sync::Arc;

use hackathons_core::domain::{MemorySessionStore, SessionGuard};
use sea_orm::DatabaseConnection;

use crate::config::ServerConfig;
use crate::repository::{
    HackathonRepository, MessageRepository, SeaOrmHackathonRepository, SeaOrmMessageRepository,
};
use crate::storage::{BlobStore, LocalBlobStore};

/// Session guard backed by the process-local store.
pub type AdminGuard = SessionGuard<MemorySessionStore>;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub hackathons: Arc<dyn HackathonRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub sessions: Arc<AdminGuard>,
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    /// Wires the sea-orm repositories, the in-memory session guard and the
    /// local blob store from configuration.
    pub fn new(db: DatabaseConnection, config: &ServerConfig) -> anyhow::Result<Self> {
        let sessions = SessionGuard::new(config.admin.credentials(), MemorySessionStore::new())
            .with_ttl(config.admin.session_ttl()?);

        Ok(Self {
            hackathons: Arc::new(SeaOrmHackathonRepository::new(db.clone())),
            messages: Arc::new(SeaOrmMessageRepository::new(db)),
            sessions: Arc::new(sessions),
            blobs: Arc::new(LocalBlobStore::new(
                &config.uploads.dir,
                &config.uploads.public_base_url,
            )),
        })
    }
}
