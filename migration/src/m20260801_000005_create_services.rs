use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Services::ServiceId).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Services::BusinessId).uuid().not_null())
                    .col(ColumnDef::new(Services::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Services::Icon).string_len(50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_business_id")
                            .from(Services::Table, Services::BusinessId)
                            .to(Businesses::Table, Businesses::BusinessId)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    ServiceId,
    BusinessId,
    Name,
    Icon,
}

#[derive(DeriveIden)]
enum Businesses {
    Table,
    BusinessId,
}
