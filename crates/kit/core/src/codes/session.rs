//! Session (instant-messaging authorization) error codes.

/// Error codes raised by the messaging/session layer.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::FromRepr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[repr(i32)]
pub enum SessionCode {
    Success = 0,
    Failed = -1,
    /// The target user id is not a valid account.
    InvalidUserId = 7002,
}

impl SessionCode {
    /// Key resolved for session codes outside the known set.
    pub const FALLBACK_KEY: &'static str = crate::GENERIC_FAILURE_KEY;

    /// Localization key for this code.
    pub const fn localization_key(self) -> &'static str {
        match self {
            Self::Success => "live.error.success",
            Self::Failed => "live.error.failed",
            Self::InvalidUserId => "live.error.invalid.userId",
        }
    }
}
