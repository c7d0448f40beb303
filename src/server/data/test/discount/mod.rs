use crate::server::data::discount::DiscountCodeRepository;
use crate::server::model::event::{CreateDiscountCodeParams, DiscountType};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod redeem;

fn percentage_params(code: &str, max_uses: Option<i32>) -> CreateDiscountCodeParams {
    CreateDiscountCodeParams {
        code: code.to_string(),
        discount_type: DiscountType::Percentage,
        discount_value: Decimal::TEN,
        max_uses,
        valid_until: None,
    }
}

async fn event_fixture(db: &sea_orm::DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    let user = factory::user::create_user(db).await?;
    let channel = factory::channel::create_channel(db, user.id).await?;
    factory::event::create_event(db, channel.id).await
}
