//! Conversion of raw signals into the uniform error value.
use crate::action::ActionDescriptor;
use crate::signal::ErrorSignal;

/// Resolves a localization key to text in the active language.
///
/// Implementations must return non-empty, human-readable text for every key,
/// substituting a generic failure message when a specific entry is missing.
/// Language selection happens behind this trait; the normalizer never picks
/// one.
pub trait Localizer {
    fn resolve(&self, key: &str) -> String;
}

/// Uniform error value handed to stores and dispatchers.
///
/// Built once at the failure site, consumed once, then discarded. `signal`
/// is retained so diagnostics keep the raw domain and code; `message` says
/// *what operation* failed (caller-supplied); `localized_text` says *why* in
/// the user's language.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{localized_text}")]
pub struct NormalizedError {
    pub signal: ErrorSignal,
    pub message: String,
    pub localized_text: String,
    pub actions: Vec<ActionDescriptor>,
}

impl NormalizedError {
    /// Appends a follow-up action, preserving insertion order.
    #[must_use]
    pub fn with_action(mut self, action: ActionDescriptor) -> Self {
        self.actions.push(action);
        self
    }
}

/// Wraps a raw signal into a [`NormalizedError`].
///
/// Pure value construction: no logging, no dispatch, no shared state. The
/// localized text is a function of the signal alone (via its localization
/// key and the injected `localizer`); `message` and `actions` pass through
/// untouched.
pub fn normalize<L>(
    signal: ErrorSignal,
    message: impl Into<String>,
    actions: Vec<ActionDescriptor>,
    localizer: &L,
) -> NormalizedError
where
    L: Localizer + ?Sized,
{
    NormalizedError {
        localized_text: localizer.resolve(signal.localization_key()),
        signal,
        message: message.into(),
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Domain;

    /// Test localizer that echoes the key back as the resolved text.
    struct KeyEcho;

    impl Localizer for KeyEcho {
        fn resolve(&self, key: &str) -> String {
            key.to_string()
        }
    }

    #[test]
    fn message_and_actions_pass_through_unchanged() {
        let actions = vec![
            ActionDescriptor::ExitBattle,
            ActionDescriptor::ReportError {
                message: "secondary".into(),
            },
            ActionDescriptor::LeaveRoom,
        ];
        let err = normalize(
            ErrorSignal::new(Domain::Battle, -1301),
            "failed to invite anchor",
            actions.clone(),
            &KeyEcho,
        );
        assert_eq!(err.message, "failed to invite anchor");
        assert_eq!(err.actions, actions);
    }

    #[test]
    fn localized_text_ignores_the_caller_message() {
        let a = normalize(
            ErrorSignal::new(Domain::Connection, -103),
            "joining room 42",
            Vec::new(),
            &KeyEcho,
        );
        let b = normalize(
            ErrorSignal::new(Domain::Connection, -103),
            "something else entirely",
            Vec::new(),
            &KeyEcho,
        );
        assert_eq!(a.localized_text, "live.error.connection.full");
        assert_eq!(a.localized_text, b.localized_text);
    }

    #[test]
    fn empty_message_is_accepted() {
        let err = normalize(
            ErrorSignal::new(Domain::Engine, -1),
            "",
            Vec::new(),
            &KeyEcho,
        );
        assert_eq!(err.message, "");
        assert_eq!(err.localized_text, "live.error.failed");
    }

    #[test]
    fn with_action_appends_in_order() {
        let err = normalize(
            ErrorSignal::new(Domain::Session, 7002),
            "failed to send gift",
            Vec::new(),
            &KeyEcho,
        )
        .with_action(ActionDescriptor::RefreshSeatList)
        .with_action(ActionDescriptor::Reconnect);
        assert_eq!(
            err.actions,
            vec![
                ActionDescriptor::RefreshSeatList,
                ActionDescriptor::Reconnect
            ]
        );
    }

    #[test]
    fn display_is_the_localized_text() {
        let err = normalize(
            ErrorSignal::new(Domain::Session, 7002),
            "failed to send gift",
            Vec::new(),
            &KeyEcho,
        );
        assert_eq!(err.to_string(), "live.error.invalid.userId");
    }
}
