//! Data access for the two persisted tables.
//!
//! Each repository owns the explicit column set of its table and builds
//! parameterized statements through sea-orm. Store failures are returned
//! unchanged; nothing here retries or wraps statements in transactions.

mod hackathon_repository;
mod message_repository;

pub use hackathon_repository::{HackathonRecord, HackathonRepository, SeaOrmHackathonRepository};
pub use message_repository::{MessageRecord, MessageRepository, SeaOrmMessageRepository};
