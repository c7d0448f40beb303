//! Registration and OTP domain types.

use std::fmt;

/// Lifecycle of a registration session.
///
/// The session only ever moves forward: `Started` → `EmailVerified` →
/// `Completed`. The transition table lives in [`Self::can_transition_to`] and
/// repositories advance state with a compare-and-swap on the current value,
/// so an out-of-order or repeated transition fails instead of rewinding the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    Started,
    EmailVerified,
    Completed,
}

impl RegistrationState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::EmailVerified => "email_verified",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "started" => Some(Self::Started),
            "email_verified" => Some(Self::EmailVerified),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// The transition table. Everything not listed here is forbidden,
    /// including every backward edge and every self-loop.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Started, Self::EmailVerified) | (Self::EmailVerified, Self::Completed)
        )
    }
}

impl fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an OTP code authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    Register,
    Login,
    PasswordReset,
}

impl OtpPurpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::PasswordReset => "password_reset",
        }
    }
}

/// How an OTP code is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpMethod {
    Email,
    Sms,
}

impl OtpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "email" => Some(Self::Email),
            "sms" => Some(Self::Sms),
            _ => None,
        }
    }
}
