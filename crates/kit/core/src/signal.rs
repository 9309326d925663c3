//! Raw error signals and their mapping to localization keys.
use std::fmt;

use strum::IntoEnumIterator;

use crate::codes::{BattleCode, ConnectionCode, EngineCode, SessionCode};

/// Subsystem a raw error code originates from.
///
/// Codes are unique only within their domain, so a bare `i32` is meaningless
/// without one of these.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Domain {
    /// Cross-room battle (PK) operations.
    Battle,
    /// Cross-room connection (co-anchoring) operations.
    Connection,
    /// Messaging/session authorization layer.
    Session,
    /// Room engine: lifecycle, devices, seats, chat.
    Engine,
}

/// A raw error value as reported by a failing subsystem.
///
/// The original `i32` is retained even for codes the symbolic enums do not
/// name, so logs never lose the value that actually came off the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSignal {
    Battle { code: i32 },
    Connection { code: i32 },
    Session { code: i32 },
    Engine { code: i32 },
}

impl ErrorSignal {
    /// Builds a signal from a domain tag and raw code.
    pub const fn new(domain: Domain, code: i32) -> Self {
        match domain {
            Domain::Battle => Self::Battle { code },
            Domain::Connection => Self::Connection { code },
            Domain::Session => Self::Session { code },
            Domain::Engine => Self::Engine { code },
        }
    }

    /// Domain this signal belongs to.
    pub const fn domain(&self) -> Domain {
        match self {
            Self::Battle { .. } => Domain::Battle,
            Self::Connection { .. } => Domain::Connection,
            Self::Session { .. } => Domain::Session,
            Self::Engine { .. } => Domain::Engine,
        }
    }

    /// Raw code as reported by the subsystem.
    pub const fn code(&self) -> i32 {
        match *self {
            Self::Battle { code }
            | Self::Connection { code }
            | Self::Session { code }
            | Self::Engine { code } => code,
        }
    }

    /// Localization key for this signal.
    ///
    /// Total over all inputs: codes outside the symbolic set resolve to the
    /// domain's fallback key. Same signal, same key, always.
    pub fn localization_key(&self) -> &'static str {
        match *self {
            Self::Battle { code } => BattleCode::from_repr(code)
                .map_or(BattleCode::FALLBACK_KEY, BattleCode::localization_key),
            Self::Connection { code } => ConnectionCode::from_repr(code)
                .map_or(ConnectionCode::FALLBACK_KEY, ConnectionCode::localization_key),
            Self::Session { code } => SessionCode::from_repr(code)
                .map_or(SessionCode::FALLBACK_KEY, SessionCode::localization_key),
            Self::Engine { code } => EngineCode::from_repr(code)
                .map_or(EngineCode::FALLBACK_KEY, EngineCode::localization_key),
        }
    }
}

impl fmt::Display for ErrorSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.domain(), self.code())
    }
}

/// Every localization key any signal can resolve to, fallbacks included.
///
/// String catalogs are expected to cover all of these; the locale crate
/// asserts as much in its tests.
pub fn all_localization_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = BattleCode::iter()
        .map(BattleCode::localization_key)
        .chain(ConnectionCode::iter().map(ConnectionCode::localization_key))
        .chain(SessionCode::iter().map(SessionCode::localization_key))
        .chain(EngineCode::iter().map(EngineCode::localization_key))
        .chain([
            BattleCode::FALLBACK_KEY,
            ConnectionCode::FALLBACK_KEY,
            SessionCode::FALLBACK_KEY,
            EngineCode::FALLBACK_KEY,
        ])
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}
