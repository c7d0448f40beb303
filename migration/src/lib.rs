pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_organization_table;
mod m20260801_000003_create_user_organization_table;
mod m20260801_000004_create_channel_table;
mod m20260801_000005_create_channel_subscription_table;
mod m20260801_000006_create_channel_admin_table;
mod m20260801_000007_create_registration_session_table;
mod m20260801_000008_create_otp_code_table;
mod m20260801_000009_create_refresh_token_table;
mod m20260802_000010_create_event_table;
mod m20260802_000011_create_event_registration_table;
mod m20260802_000012_create_event_transaction_table;
mod m20260802_000013_create_discount_code_table;
mod m20260802_000014_create_event_alert_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_organization_table::Migration),
            Box::new(m20260801_000003_create_user_organization_table::Migration),
            Box::new(m20260801_000004_create_channel_table::Migration),
            Box::new(m20260801_000005_create_channel_subscription_table::Migration),
            Box::new(m20260801_000006_create_channel_admin_table::Migration),
            Box::new(m20260801_000007_create_registration_session_table::Migration),
            Box::new(m20260801_000008_create_otp_code_table::Migration),
            Box::new(m20260801_000009_create_refresh_token_table::Migration),
            Box::new(m20260802_000010_create_event_table::Migration),
            Box::new(m20260802_000011_create_event_registration_table::Migration),
            Box::new(m20260802_000012_create_event_transaction_table::Migration),
            Box::new(m20260802_000013_create_discount_code_table::Migration),
            Box::new(m20260802_000014_create_event_alert_table::Migration),
        ]
    }
}
