use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Businesses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Businesses::BusinessId).uuid().not_null().primary_key().extra("DEFAULT gen_random_uuid()"))
                    .col(ColumnDef::new(Businesses::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Businesses::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Businesses::Slug).string_len(200).not_null().unique_key())
                    .col(ColumnDef::new(Businesses::CategoryId).uuid())
                    .col(ColumnDef::new(Businesses::Description).text().not_null())
                    .col(ColumnDef::new(Businesses::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Businesses::City).string_len(100).not_null())
                    .col(ColumnDef::new(Businesses::District).string_len(100))
                    .col(ColumnDef::new(Businesses::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Businesses::Instagram).string_len(100))
                    .col(ColumnDef::new(Businesses::IsApproved).boolean().not_null().default(false))
                    .col(ColumnDef::new(Businesses::CreatedAt).timestamp_with_time_zone().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_businesses_owner_id")
                            .from(Businesses::Table, Businesses::OwnerId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_businesses_category_id")
                            .from(Businesses::Table, Businesses::CategoryId)
                            .to(Categories::Table, Categories::CategoryId)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .to_owned(),
            )
            .await?;

        // Listing always filters on approval; city backs the facet counts.
        manager
            .create_index(
                Index::create()
                    .name("idx_businesses_is_approved_city")
                    .table(Businesses::Table)
                    .col(Businesses::IsApproved)
                    .col(Businesses::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Businesses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Businesses {
    Table,
    BusinessId,
    OwnerId,
    Name,
    Slug,
    CategoryId,
    Description,
    Address,
    City,
    District,
    Phone,
    Instagram,
    IsApproved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    CategoryId,
}
