use crate::entity::hackathon;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use hackathons_core::domain::{
    HackathonFilter, HackathonId, HackathonOrder, HackathonStatus, NewHackathon, SortOrder,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HackathonRecord {
    pub id: HackathonId,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub venue: String,
    pub organizer_name: String,
    pub organizer_email: String,
    pub image_url: Option<String>,
    pub status: HackathonStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[async_trait]
pub trait HackathonRepository: Send + Sync {
    async fn create(&self, new_hackathon: NewHackathon) -> Result<HackathonRecord>;
    async fn find_by_id(&self, hackathon_id: HackathonId) -> Result<Option<HackathonRecord>>;
    async fn list(&self, filter: HackathonFilter) -> Result<Vec<HackathonRecord>>;
    async fn update_status(
        &self,
        hackathon_id: HackathonId,
        status: HackathonStatus,
    ) -> Result<Option<HackathonRecord>>;
    /// Deletes the row and returns what it contained.
    async fn delete(&self, hackathon_id: HackathonId) -> Result<Option<HackathonRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmHackathonRepository {
    db: DatabaseConnection,
}

impl SeaOrmHackathonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: hackathon::Model) -> Result<HackathonRecord> {
        let status = HackathonStatus::from_str(&model.status).map_err(|e| {
            anyhow!(
                "invalid hackathons.status '{}' from database for id {}: {e}",
                model.status,
                model.id
            )
        })?;

        Ok(HackathonRecord {
            id: HackathonId::new(model.id),
            name: model.name,
            description: model.description,
            start_date: model.start_date,
            end_date: model.end_date,
            location: model.location,
            venue: model.venue,
            organizer_name: model.organizer_name,
            organizer_email: model.organizer_email,
            image_url: model.image_url,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[async_trait]
impl HackathonRepository for SeaOrmHackathonRepository {
    async fn create(&self, new_hackathon: NewHackathon) -> Result<HackathonRecord> {
        let active_model = hackathon::ActiveModel {
            name: Set(new_hackathon.name),
            description: Set(new_hackathon.description),
            start_date: Set(new_hackathon.start_date),
            end_date: Set(new_hackathon.end_date),
            location: Set(new_hackathon.location),
            venue: Set(new_hackathon.venue),
            organizer_name: Set(new_hackathon.organizer_name),
            organizer_email: Set(new_hackathon.organizer_email),
            image_url: Set(new_hackathon.image_url),
            status: Set(HackathonStatus::Submitted.as_str().to_string()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Self::map_model(model)
    }

    async fn find_by_id(&self, hackathon_id: HackathonId) -> Result<Option<HackathonRecord>> {
        let model = hackathon::Entity::find_by_id(hackathon_id.value())
            .one(&self.db)
            .await?;

        model.map(Self::map_model).transpose()
    }

    async fn list(&self, filter: HackathonFilter) -> Result<Vec<HackathonRecord>> {
        let mut query = hackathon::Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(hackathon::Column::Status.eq(status.as_str()));
        }

        query = match filter.order {
            HackathonOrder::CreatedAt(SortOrder::Newest) => query
                .order_by_desc(hackathon::Column::CreatedAt)
                .order_by_desc(hackathon::Column::Id),
            HackathonOrder::CreatedAt(SortOrder::Oldest) => query
                .order_by_asc(hackathon::Column::CreatedAt)
                .order_by_asc(hackathon::Column::Id),
            HackathonOrder::StartDate => query
                .order_by_asc(hackathon::Column::StartDate)
                .order_by_asc(hackathon::Column::Id),
        };

        let models = query.all(&self.db).await?;
        models.into_iter().map(Self::map_model).collect()
    }

    async fn update_status(
        &self,
        hackathon_id: HackathonId,
        status: HackathonStatus,
    ) -> Result<Option<HackathonRecord>> {
        let Some(model) = hackathon::Entity::find_by_id(hackathon_id.value())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: hackathon::ActiveModel = model.into();
        active_model.status = Set(status.as_str().to_string());
        active_model.updated_at = Set(Utc::now().naive_utc());

        let updated = active_model.update(&self.db).await?;
        Self::map_model(updated).map(Some)
    }

    async fn delete(&self, hackathon_id: HackathonId) -> Result<Option<HackathonRecord>> {
        let Some(model) = hackathon::Entity::find_by_id(hackathon_id.value())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let result = hackathon::Entity::delete_by_id(hackathon_id.value())
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Self::map_model(model).map(Some)
    }
}
