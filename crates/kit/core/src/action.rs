//! Follow-up action descriptors attached to normalized errors.

/// A follow-up step a dispatcher may take after observing an error.
///
/// Descriptors are plain data: the normalizer never executes them, it only
/// carries them from the failure site to the dispatcher in input order.
///
/// # Dispatch convention
///
/// A store consuming a [`crate::NormalizedError`] is expected to surface the
/// localized text to the user, execute the attached actions, and skip
/// [`ActionDescriptor::ReportError`] entries. Re-dispatching an error-report
/// action from an error handler would feed the handler its own output; the
/// filter breaks that loop. Enforcement lives in the consumer (see the store
/// crate), not here.
#[derive(Clone, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ActionDescriptor {
    /// Leave the current room.
    LeaveRoom,
    /// Tear down the active battle.
    ExitBattle,
    /// Re-establish the room connection.
    Reconnect,
    /// Reload the seat list from the engine.
    RefreshSeatList,
    /// Report a further error; always filtered by dispatchers.
    ReportError { message: String },
}

impl ActionDescriptor {
    /// True for actions a dispatcher must filter out to avoid loops.
    pub const fn is_error_report(&self) -> bool {
        matches!(self, Self::ReportError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_report_error_is_filtered() {
        assert!(
            ActionDescriptor::ReportError {
                message: "x".into()
            }
            .is_error_report()
        );
        assert!(!ActionDescriptor::LeaveRoom.is_error_report());
        assert!(!ActionDescriptor::Reconnect.is_error_report());
    }

    #[test]
    fn display_uses_snake_case_names() {
        assert_eq!(ActionDescriptor::RefreshSeatList.to_string(), "refresh_seat_list");
    }
}
