//! Hackathon submission, review and calendar routes.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use chrono::Utc;
use hackathons_api_types::{
    CalendarMonth, CalendarResponse, CreateHackathonRequest, Hackathon, HackathonListResponse,
    HackathonResponse, ReviewStatus, SuccessResponse, UpdateHackathonStatusRequest,
};
use hackathons_core::domain::{
    DomainError, HackathonFilter, HackathonId, HackathonInput, HackathonStatus, NewHackathon,
    group_by_month,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::admin::{RequireAdmin, bearer_token};
use super::error::ApiError;
use super::extract::{ApiJson, ApiQuery};
use super::state::AppState;
use crate::repository::HackathonRecord;

/// Builds the hackathon submission, review and calendar routes.
pub fn create_hackathons_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/hackathons",
            get(list_hackathons).post(create_hackathon),
        )
        .route(
            "/api/hackathons/{id}",
            get(get_hackathon)
                .patch(update_hackathon_status)
                .delete(delete_hackathon),
        )
        .route("/api/calendar", get(calendar))
}

/// `status` is one of the review states or `all`. Absent means `approved`.
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    status: Option<String>,
}

impl ListQuery {
    fn filter(&self) -> Result<HackathonFilter, DomainError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(HackathonFilter::with_status(HackathonStatus::Approved)),
            Some("all") => Ok(HackathonFilter::all()),
            Some(status) => HackathonStatus::from_str(status).map(HackathonFilter::with_status),
        }
    }
}

/// Lists hackathons, approved only unless an admin asks for another status.
async fn list_hackathons(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<HackathonListResponse>, ApiError> {
    let filter = query.filter()?;
    if !filter.is_public() {
        state
            .sessions
            .require(bearer_token(&headers), Utc::now())
            .await?;
    }

    let records = state.hackathons.list(filter).await?;
    debug!(count = records.len(), status = ?filter.status, "listed hackathons");

    Ok(Json(HackathonListResponse {
        hackathons: records.into_iter().map(Hackathon::from).collect(),
    }))
}

/// Submits a new hackathon for review.
async fn create_hackathon(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CreateHackathonRequest>,
) -> Result<(StatusCode, Json<HackathonResponse>), ApiError> {
    let new_hackathon = NewHackathon::try_from(hackathon_input(request))?;
    let record = state.hackathons.create(new_hackathon).await?;

    info!(id = %record.id, name = %record.name, "hackathon submitted");
    Ok((
        StatusCode::CREATED,
        Json(HackathonResponse {
            hackathon: record.into(),
        }),
    ))
}

/// Unapproved submissions are only visible with an admin session.
async fn get_hackathon(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<HackathonResponse>, ApiError> {
    let id = parse_id(&id)?;
    let record = state
        .hackathons
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !record.status.is_public() {
        let auth = state
            .sessions
            .check(bearer_token(&headers), Utc::now())
            .await;
        if !auth.is_authenticated() {
            return Err(not_found(id));
        }
    }

    Ok(Json(HackathonResponse {
        hackathon: record.into(),
    }))
}

/// Moves a hackathon to another review status.
async fn update_hackathon_status(
    State(state): State<Arc<AppState>>,
    RequireAdmin(session): RequireAdmin,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateHackathonStatusRequest>,
) -> Result<Json<HackathonResponse>, ApiError> {
    let id = parse_id(&id)?;
    let status = request
        .status
        .ok_or(DomainError::MissingField("status"))?
        .parse::<HackathonStatus>()?;

    let record = state
        .hackathons
        .update_status(id, status)
        .await?
        .ok_or_else(|| not_found(id))?;

    info!(id = %id, status = %status, admin = %session.email, "hackathon status changed");
    Ok(Json(HackathonResponse {
        hackathon: record.into(),
    }))
}

/// Deletes a hackathon.
async fn delete_hackathon(
    State(state): State<Arc<AppState>>,
    RequireAdmin(session): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = parse_id(&id)?;
    let removed = state
        .hackathons
        .delete(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    info!(id = %id, name = %removed.name, admin = %session.email, "hackathon deleted");
    Ok(Json(SuccessResponse::ok()))
}

/// Approved hackathons grouped by the month they start in.
async fn calendar(State(state): State<Arc<AppState>>) -> Result<Json<CalendarResponse>, ApiError> {
    let records = state.hackathons.list(HackathonFilter::calendar()).await?;

    let months = group_by_month(records, |record| record.start_date)
        .into_iter()
        .map(|group| CalendarMonth {
            year: group.year,
            month: group.month,
            label: group.label,
            hackathons: group.entries.into_iter().map(Hackathon::from).collect(),
        })
        .collect();

    Ok(Json(CalendarResponse { months }))
}

/// Ids that cannot exist are reported the same way as missing rows.
fn parse_id(raw: &str) -> Result<HackathonId, ApiError> {
    HackathonId::from_str(raw).map_err(|_| ApiError::not_found(format!("hackathon {raw} not found")))
}

fn not_found(id: HackathonId) -> ApiError {
    ApiError::not_found(format!("hackathon {id} not found"))
}

/// Copies the request fields into the unvalidated domain input.
fn hackathon_input(request: CreateHackathonRequest) -> HackathonInput {
    HackathonInput {
        name: request.name,
        description: request.description,
        start_date: request.start_date,
        end_date: request.end_date,
        location: request.location,
        venue: request.venue,
        organizer_name: request.organizer_name,
        organizer_email: request.organizer_email,
        image_url: request.image_url,
    }
}

impl From<HackathonRecord> for Hackathon {
    fn from(record: HackathonRecord) -> Self {
        Self {
            id: record.id.value(),
            name: record.name,
            description: record.description,
            start_date: record.start_date,
            end_date: record.end_date,
            location: record.location,
            venue: record.venue,
            organizer_name: record.organizer_name,
            organizer_email: record.organizer_email,
            image_url: record.image_url,
            status: review_status(record.status),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

fn review_status(status: HackathonStatus) -> ReviewStatus {
    match status {
        HackathonStatus::Submitted => ReviewStatus::Submitted,
        HackathonStatus::Approved => ReviewStatus::Approved,
        HackathonStatus::Rejected => ReviewStatus::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(status: Option<&str>) -> ListQuery {
        ListQuery {
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn listing_defaults_to_approved() {
        let filter = query(None).filter().expect("default filter");
        assert_eq!(filter.status, Some(HackathonStatus::Approved));
        assert!(filter.is_public());
    }

    #[test]
    fn all_lists_every_status() {
        let filter = query(Some("all")).filter().expect("all filter");
        assert_eq!(filter.status, None);
        assert!(!filter.is_public());
    }

    #[test]
    fn unknown_status_filter_is_a_validation_error() {
        assert!(matches!(
            query(Some("archived")).filter(),
            Err(DomainError::InvalidStatus(_))
        ));
    }
}
