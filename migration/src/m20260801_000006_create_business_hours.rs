use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessHours::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BusinessHours::HoursId).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(BusinessHours::BusinessId).uuid().not_null())
                    .col(ColumnDef::new(BusinessHours::Days).string_len(100).not_null())
                    .col(ColumnDef::new(BusinessHours::StartTime).string_len(5))
                    .col(ColumnDef::new(BusinessHours::EndTime).string_len(5))
                    .col(ColumnDef::new(BusinessHours::IsClosed).boolean().not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_hours_business_id")
                            .from(BusinessHours::Table, BusinessHours::BusinessId)
                            .to(Businesses::Table, Businesses::BusinessId)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessHours::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BusinessHours {
    Table,
    HoursId,
    BusinessId,
    Days,
    StartTime,
    EndTime,
    IsClosed,
}

#[derive(DeriveIden)]
enum Businesses {
    Table,
    BusinessId,
}
