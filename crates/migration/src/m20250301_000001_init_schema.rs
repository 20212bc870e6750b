use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hackathons::Table)
                    .if_not_exists()
                    .col(pk_auto(Hackathons::Id))
                    .col(string_len(Hackathons::Name, 255))
                    .col(text(Hackathons::Description))
                    .col(date(Hackathons::StartDate))
                    .col(date(Hackathons::EndDate))
                    .col(string_len(Hackathons::Location, 255))
                    .col(string_len(Hackathons::Venue, 255))
                    .col(string_len(Hackathons::OrganizerName, 255))
                    .col(string_len(Hackathons::OrganizerEmail, 255))
                    .col(text_null(Hackathons::ImageUrl))
                    // submitted | approved | rejected, mirrored by HackathonStatus.
                    .col(
                        string_len(Hackathons::Status, 20)
                            .default("submitted")
                            .check(Expr::col(Hackathons::Status).is_in([
                                "submitted",
                                "approved",
                                "rejected",
                            ])),
                    )
                    .col(timestamp(Hackathons::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Hackathons::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(pk_auto(Messages::Id))
                    .col(string_len(Messages::Name, 255))
                    .col(string_len(Messages::Email, 255))
                    .col(string_len(Messages::Subject, 255))
                    .col(text(Messages::Message))
                    .col(timestamp(Messages::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hackathons_status")
                    .table(Hackathons::Table)
                    .col(Hackathons::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hackathons_start_date")
                    .table(Hackathons::Table)
                    .col(Hackathons::StartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_messages_created_at")
                    .table(Messages::Table)
                    .col(Messages::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hackathons::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Hackathons {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Location,
    Venue,
    OrganizerName,
    OrganizerEmail,
    ImageUrl,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    CreatedAt,
}
