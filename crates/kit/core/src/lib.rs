//! Error normalization primitives shared across the UI kit.
//!
//! `kit-core` owns the closed set of error domains a live room can surface
//! (battle, connection, session, room engine), maps every `(domain, code)`
//! pair to a stable localization key, and wraps failures into the uniform
//! [`NormalizedError`] value that stores and dispatchers consume. Text
//! resolution is delegated to an injected [`Localizer`], so this crate never
//! selects a language and never performs I/O.
pub mod action;
pub mod codes;
pub mod normalize;
pub mod signal;

pub use action::ActionDescriptor;
pub use codes::{BattleCode, ConnectionCode, EngineCode, SessionCode};
pub use normalize::{Localizer, NormalizedError, normalize};
pub use signal::{Domain, ErrorSignal, all_localization_keys};

/// Key of the generic "operation failed" text.
///
/// The last resort at every resolution layer: unknown codes in most domains
/// map here, and string catalogs fall back to this entry when a specific key
/// is missing.
pub const GENERIC_FAILURE_KEY: &str = "live.error.failed";
