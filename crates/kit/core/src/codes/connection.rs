//! Cross-room connection error codes.

/// Error codes raised while linking the local room to another room.
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
pub enum ConnectionCode {
    Success = 0,
    /// The target room does not exist.
    RoomNotExist = -100,
    /// A connection attempt to the target room is already in flight.
    Connecting = -101,
    /// The target room is connecting to a different room.
    ConnectingOtherRoom = -102,
    /// The target room reached its connection limit.
    Full = -103,
    /// Transient failure, the caller may retry.
    Retry = -104,
}

impl ConnectionCode {
    /// Key resolved for connection codes outside the known set.
    pub const FALLBACK_KEY: &'static str = crate::GENERIC_FAILURE_KEY;

    /// Localization key for this code.
    pub const fn localization_key(self) -> &'static str {
        match self {
            Self::Success => "live.error.success",
            Self::RoomNotExist => "live.error.connection.notexit",
            Self::Connecting => "live.error.connection.connecting",
            Self::ConnectingOtherRoom => "live.error.connection.connectingOtherRoom",
            Self::Full => "live.error.connection.full",
            Self::Retry => "live.error.connection.retry",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_room_maps_to_connection_full_key() {
        assert_eq!(
            ConnectionCode::Full.localization_key(),
            "live.error.connection.full"
        );
    }

    #[test]
    fn unknown_code_is_not_representable() {
        assert_eq!(ConnectionCode::from_repr(-99), None);
    }
}
