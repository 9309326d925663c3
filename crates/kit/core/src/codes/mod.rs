//! Symbolic error codes, one closed enum per source domain.
//!
//! Each enum carries the raw `i32` discriminant reported by the failing
//! subsystem and maps every variant to a localization key. Codes are unique
//! only within their domain; cross-domain lookup goes through
//! [`crate::ErrorSignal`].
mod battle;
mod connection;
mod engine;
mod session;

pub use battle::BattleCode;
pub use connection::ConnectionCode;
pub use engine::EngineCode;
pub use session::SessionCode;
