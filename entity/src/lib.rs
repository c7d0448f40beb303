pub mod channel;
pub mod channel_admin;
pub mod channel_subscription;
pub mod discount_code;
pub mod event;
pub mod event_alert;
pub mod event_registration;
pub mod event_transaction;
pub mod organization;
pub mod otp_code;
pub mod refresh_token;
pub mod registration_session;
pub mod user;
pub mod user_organization;

pub mod prelude {
    pub use super::channel::Entity as Channel;
    pub use super::channel_admin::Entity as ChannelAdmin;
    pub use super::channel_subscription::Entity as ChannelSubscription;
    pub use super::discount_code::Entity as DiscountCode;
    pub use super::event::Entity as Event;
    pub use super::event_alert::Entity as EventAlert;
    pub use super::event_registration::Entity as EventRegistration;
    pub use super::event_transaction::Entity as EventTransaction;
    pub use super::organization::Entity as Organization;
    pub use super::otp_code::Entity as OtpCode;
    pub use super::refresh_token::Entity as RefreshToken;
    pub use super::registration_session::Entity as RegistrationSession;
    pub use super::user::Entity as User;
    pub use super::user_organization::Entity as UserOrganization;
}
