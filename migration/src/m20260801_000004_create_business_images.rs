use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessImages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BusinessImages::ImageId).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(BusinessImages::BusinessId).uuid().not_null())
                    .col(ColumnDef::new(BusinessImages::ImageUrl).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_images_business_id")
                            .from(BusinessImages::Table, BusinessImages::BusinessId)
                            .to(Businesses::Table, Businesses::BusinessId)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BusinessImages {
    Table,
    ImageId,
    BusinessId,
    ImageUrl,
}

#[derive(DeriveIden)]
enum Businesses {
    Table,
    BusinessId,
}
