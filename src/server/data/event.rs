//! Event repository: CRUD, the subscribed-channels feed, and alerts.

use chrono::Utc;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{CreateEventParams, UpdateEventParams};

/// Filters of the event feed.
#[derive(Debug, Clone, Default)]
pub struct EventFeedFilter {
    pub channel_id: Option<i32>,
    pub upcoming_only: bool,
    pub registered_only: bool,
    pub search: Option<String>,
}

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event under a channel.
    pub async fn create(
        &self,
        channel_id: i32,
        param: CreateEventParams,
        default_currency: &str,
    ) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();

        entity::event::ActiveModel {
            channel_id: ActiveValue::Set(channel_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            event_date: ActiveValue::Set(param.event_date),
            end_date: ActiveValue::Set(param.end_date),
            location: ActiveValue::Set(param.location),
            image_url: ActiveValue::Set(param.image_url),
            max_attendees: ActiveValue::Set(param.max_attendees),
            registration_deadline: ActiveValue::Set(param.registration_deadline),
            requires_payment: ActiveValue::Set(param.requires_payment),
            price: ActiveValue::Set(param.price),
            currency: ActiveValue::Set(
                param
                    .currency
                    .unwrap_or_else(|| default_currency.to_string()),
            ),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, event_id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id).one(self.db).await
    }

    /// Pages through events from channels the user subscribes to.
    ///
    /// The subscription constraint is a subquery on channel_subscriptions, so
    /// an event is only ever visible to subscribers of its channel. Filters
    /// narrow by channel, future events, events the user registered for, and
    /// a case-insensitive substring search over name, description, and
    /// location. Results are ordered by event date ascending.
    ///
    /// # Returns
    /// - `Ok((Vec<Model>, u64))` - The requested page and the total match count
    pub async fn get_from_subscribed_channels(
        &self,
        user_id: i32,
        filter: EventFeedFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<entity::event::Model>, u64), DbErr> {
        let mut query = entity::prelude::Event::find().filter(
            entity::event::Column::ChannelId.in_subquery(
                Query::select()
                    .column(entity::channel_subscription::Column::ChannelId)
                    .from(entity::prelude::ChannelSubscription)
                    .and_where(entity::channel_subscription::Column::UserId.eq(user_id))
                    .to_owned(),
            ),
        );

        if let Some(channel_id) = filter.channel_id {
            query = query.filter(entity::event::Column::ChannelId.eq(channel_id));
        }

        if filter.upcoming_only {
            query = query.filter(entity::event::Column::EventDate.gte(Utc::now()));
        }

        if filter.registered_only {
            query = query.filter(
                entity::event::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::event_registration::Column::EventId)
                        .from(entity::prelude::EventRegistration)
                        .and_where(entity::event_registration::Column::UserId.eq(user_id))
                        .to_owned(),
                ),
            );
        }

        if let Some(search) = filter.search.filter(|s| !s.trim().is_empty()) {
            let term = search.trim().to_string();
            query = query.filter(
                Condition::any()
                    .add(entity::event::Column::Name.contains(&term))
                    .add(entity::event::Column::Description.contains(&term))
                    .add(entity::event::Column::Location.contains(&term)),
            );
        }

        let paginator = query
            .order_by_asc(entity::event::Column::EventDate)
            .paginate(self.db, page_size.max(1));

        let total = paginator.num_items().await?;
        let events = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((events, total))
    }

    /// Patches an event; only provided fields are written, and `updated_at`
    /// is bumped.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated event
    /// - `Ok(None)` - No event with that id
    pub async fn update(
        &self,
        event_id: i32,
        param: UpdateEventParams,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some(event) = self.find_by_id(event_id).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = event.into();

        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(event_date) = param.event_date {
            active.event_date = ActiveValue::Set(event_date);
        }
        if let Some(end_date) = param.end_date {
            active.end_date = ActiveValue::Set(Some(end_date));
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(Some(location));
        }
        if let Some(image_url) = param.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(max_attendees) = param.max_attendees {
            active.max_attendees = ActiveValue::Set(Some(max_attendees));
        }
        if let Some(deadline) = param.registration_deadline {
            active.registration_deadline = ActiveValue::Set(Some(deadline));
        }
        if let Some(requires_payment) = param.requires_payment {
            active.requires_payment = ActiveValue::Set(requires_payment);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(Some(price));
        }
        if let Some(currency) = param.currency {
            active.currency = ActiveValue::Set(currency);
        }

        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes an event.
    ///
    /// # Returns
    /// - `Ok(true)` - Event deleted
    /// - `Ok(false)` - No event with that id
    pub async fn delete(&self, event_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(event_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Creates an alert for an event.
    pub async fn create_alert(
        &self,
        event_id: i32,
        title: &str,
        message: &str,
        created_by: i32,
    ) -> Result<entity::event_alert::Model, DbErr> {
        entity::event_alert::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            title: ActiveValue::Set(title.to_string()),
            message: ActiveValue::Set(message.to_string()),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now()),
            sent_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Pages through an event's alerts, newest first.
    pub async fn get_alerts(
        &self,
        event_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<entity::event_alert::Model>, u64), DbErr> {
        let paginator = entity::prelude::EventAlert::find()
            .filter(entity::event_alert::Column::EventId.eq(event_id))
            .order_by_desc(entity::event_alert::Column::CreatedAt)
            .paginate(self.db, page_size.max(1));

        let total = paginator.num_items().await?;
        let alerts = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((alerts, total))
    }
}
