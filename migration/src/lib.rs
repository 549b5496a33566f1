pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users;
mod m20260801_000002_create_categories;
mod m20260801_000003_create_businesses;
mod m20260801_000004_create_business_images;
mod m20260801_000005_create_services;
mod m20260801_000006_create_business_hours;
mod m20260801_000007_create_business_ratings;
mod m20260801_000008_create_conversations;
mod m20260801_000009_create_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users::Migration),
            Box::new(m20260801_000002_create_categories::Migration),
            Box::new(m20260801_000003_create_businesses::Migration),
            Box::new(m20260801_000004_create_business_images::Migration),
            Box::new(m20260801_000005_create_services::Migration),
            Box::new(m20260801_000006_create_business_hours::Migration),
            Box::new(m20260801_000007_create_business_ratings::Migration),
            Box::new(m20260801_000008_create_conversations::Migration),
            Box::new(m20260801_000009_create_messages::Migration),
        ]
    }
}
