use crate::server::data::registration::RegistrationSessionRepository;
use crate::server::model::auth::RegistrationState;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod advance;
mod find;
