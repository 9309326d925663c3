//! Battle (PK) subsystem error codes.

/// Error codes raised while starting or running a cross-room battle.
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
pub enum BattleCode {
    Success = 0,
    Unknown = -1,
    /// The invited anchor is already battling in another room.
    BattlingOtherRoom = -1301,
}

impl BattleCode {
    /// Key resolved for battle codes outside the known set.
    pub const FALLBACK_KEY: &'static str = "live.battle.error.other";

    /// Localization key for this code.
    pub const fn localization_key(self) -> &'static str {
        match self {
            Self::Success => "live.error.success",
            Self::Unknown => "live.error.failed",
            Self::BattlingOtherRoom => "live.battle.error.conflict",
        }
    }
}
