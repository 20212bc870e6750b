mod calendar;
mod contact_message;
mod error;
mod filter;
mod hackathon;
mod hackathon_status;
mod ids;
mod session;
mod upload;

pub use calendar::{MonthGroup, group_by_month, month_label};
pub use contact_message::{ContactInput, NewContactMessage};
pub use error::DomainError;
pub use filter::{HackathonFilter, HackathonOrder, SortOrder};
pub use hackathon::{DATE_FORMAT, HackathonInput, MAX_FIELD_CHARS, NewHackathon};
pub use hackathon_status::HackathonStatus;
pub use ids::{HackathonId, MessageId};
pub use session::{
    AdminCredentials, AdminSession, AuthError, AuthState, DEFAULT_ADMIN_EMAIL,
    DEFAULT_ADMIN_PASSWORD, MemorySessionStore, SESSION_TTL_HOURS, SessionGuard, SessionStore,
};
pub use upload::{ImageUpload, MAX_IMAGE_BYTES};
