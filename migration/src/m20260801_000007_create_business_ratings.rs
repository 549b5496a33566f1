use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessRatings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BusinessRatings::RatingId).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(BusinessRatings::BusinessId).uuid().not_null())
                    .col(ColumnDef::new(BusinessRatings::UserId).uuid().not_null())
                    .col(ColumnDef::new(BusinessRatings::Rating).double().not_null())
                    .col(ColumnDef::new(BusinessRatings::Comment).text())
                    .col(ColumnDef::new(BusinessRatings::IsApproved).boolean().not_null().default(false))
                    .col(ColumnDef::new(BusinessRatings::CreatedAt).timestamp_with_time_zone().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(BusinessRatings::EditedAt).timestamp_with_time_zone())
                    .check(Expr::col(BusinessRatings::Rating).between(1.0, 5.0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_ratings_business_id")
                            .from(BusinessRatings::Table, BusinessRatings::BusinessId)
                            .to(Businesses::Table, Businesses::BusinessId)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_ratings_user_id")
                            .from(BusinessRatings::Table, BusinessRatings::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        // One live rating per (business, user); the application pre-checks
        // but this index is the backstop under concurrent writers.
        manager
            .create_index(
                Index::create()
                    .name("uq_business_ratings_business_user")
                    .table(BusinessRatings::Table)
                    .col(BusinessRatings::BusinessId)
                    .col(BusinessRatings::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessRatings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BusinessRatings {
    Table,
    RatingId,
    BusinessId,
    UserId,
    Rating,
    Comment,
    IsApproved,
    CreatedAt,
    EditedAt,
}

#[derive(DeriveIden)]
enum Businesses {
    Table,
    BusinessId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
}
