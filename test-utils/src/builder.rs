use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables (in dependency order), then call `build()` to get a
/// context with an in-memory SQLite database carrying that schema.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new().with_auth_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create after the tables.
    pub fn with_index(mut self, stmt: IndexCreateStatement) -> Self {
        self.indexes.push(stmt);
        self
    }

    /// Adds all tables required for registration, login, and token
    /// operations:
    /// - User, Organization, UserOrganization
    /// - RegistrationSession, OtpCode, RefreshToken
    ///
    /// The unique (user, organization) membership index is included; it is
    /// what `add_member` relies on to reject duplicates.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User)
            .with_table(Organization)
            .with_table(UserOrganization)
            .with_table(RegistrationSession)
            .with_table(OtpCode)
            .with_table(RefreshToken)
            .with_index(
                Index::create()
                    .name("idx_user_org_unique")
                    .table(UserOrganization)
                    .col(entity::user_organization::Column::UserId)
                    .col(entity::user_organization::Column::OrganizationId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds all tables required for event operations:
    /// - User, Organization, UserOrganization
    /// - Channel, ChannelSubscription, ChannelAdmin
    /// - Event, EventRegistration, EventTransaction, DiscountCode, EventAlert
    ///
    /// Includes the unique (event, user) registration index and the unique
    /// (event, code) discount index that the registration and redemption
    /// paths depend on.
    pub fn with_event_tables(self) -> Self {
        self.with_table(User)
            .with_table(Organization)
            .with_table(UserOrganization)
            .with_table(Channel)
            .with_table(ChannelSubscription)
            .with_table(ChannelAdmin)
            .with_table(Event)
            .with_table(EventRegistration)
            .with_table(EventTransaction)
            .with_table(DiscountCode)
            .with_table(EventAlert)
            .with_index(
                Index::create()
                    .name("idx_event_reg_unique")
                    .table(EventRegistration)
                    .col(entity::event_registration::Column::EventId)
                    .col(entity::event_registration::Column::UserId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_discount_event_code")
                    .table(DiscountCode)
                    .col(entity::discount_code::Column::EventId)
                    .col(entity::discount_code::Column::Code)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_channel_sub_unique")
                    .table(ChannelSubscription)
                    .col(entity::channel_subscription::Column::ChannelId)
                    .col(entity::channel_subscription::Column::UserId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds the test context: connects and creates tables, then indexes.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;
        context.with_indexes(self.indexes).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
