use crate::entity::message;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use hackathons_core::domain::{MessageId, NewContactMessage, SortOrder};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, new_message: NewContactMessage) -> Result<MessageRecord>;
    async fn find_by_id(&self, message_id: MessageId) -> Result<Option<MessageRecord>>;
    async fn list(&self, order: SortOrder) -> Result<Vec<MessageRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmMessageRepository {
    db: DatabaseConnection,
}

impl SeaOrmMessageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: message::Model) -> MessageRecord {
        MessageRecord {
            id: MessageId::new(model.id),
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl MessageRepository for SeaOrmMessageRepository {
    async fn create(&self, new_message: NewContactMessage) -> Result<MessageRecord> {
        let active_model = message::ActiveModel {
            name: Set(new_message.name),
            email: Set(new_message.email),
            subject: Set(new_message.subject),
            message: Set(new_message.message),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn find_by_id(&self, message_id: MessageId) -> Result<Option<MessageRecord>> {
        let model = message::Entity::find_by_id(message_id.value())
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_model))
    }

    async fn list(&self, order: SortOrder) -> Result<Vec<MessageRecord>> {
        let query = match order {
            SortOrder::Newest => message::Entity::find()
                .order_by_desc(message::Column::CreatedAt)
                .order_by_desc(message::Column::Id),
            SortOrder::Oldest => message::Entity::find()
                .order_by_asc(message::Column::CreatedAt)
                .order_by_asc(message::Column::Id),
        };

        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(Self::map_model).collect())
    }
}
