//! Contact form and the admin message inbox.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use hackathons_api_types::{
    ContactMessage, ContactRequest, ContactResponse, MessageListResponse,
};
use hackathons_core::domain::{ContactInput, NewContactMessage, SortOrder};
use tracing::info;

use super::admin::RequireAdmin;
use super::error::ApiError;
use super::extract::ApiJson;
use super::state::AppState;
use crate::repository::MessageRecord;

/// Builds the contact form and inbox routes.
pub fn create_messages_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/messages", get(list_messages))
}

/// Stores a message sent through the contact form.
async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let new_message = NewContactMessage::try_from(ContactInput {
        name: request.name,
        email: request.email,
        subject: request.subject,
        message: request.message,
    })?;
    let record = state.messages.create(new_message).await?;

    info!(id = %record.id, subject = %record.subject, "contact message received");
    Ok(Json(ContactResponse {
        success: true,
        data: record.into(),
    }))
}

/// Admin inbox, newest message first.
async fn list_messages(
    State(state): State<Arc<AppState>>,
    _admin: RequireAdmin,
) -> Result<Json<MessageListResponse>, ApiError> {
    let records = state.messages.list(SortOrder::Newest).await?;

    Ok(Json(MessageListResponse {
        messages: records.into_iter().map(ContactMessage::from).collect(),
    }))
}

impl From<MessageRecord> for ContactMessage {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: record.id.value(),
            name: record.name,
            email: record.email,
            subject: record.subject,
            message: record.message,
            created_at: record.created_at,
        }
    }
}
