//! End-to-end mapping checks across domains.
use kit_core::{
    ActionDescriptor, BattleCode, ConnectionCode, Domain, EngineCode, ErrorSignal, Localizer,
    SessionCode, normalize,
};
use strum::IntoEnumIterator;

/// Echoes keys so assertions can target the mapping itself.
struct KeyEcho;

impl Localizer for KeyEcho {
    fn resolve(&self, key: &str) -> String {
        key.to_string()
    }
}

#[test]
fn invalid_user_id_scenario() {
    let err = normalize(
        ErrorSignal::new(Domain::Session, 7002),
        "failed to send gift",
        Vec::new(),
        &KeyEcho,
    );
    assert_eq!(err.localized_text, "live.error.invalid.userId");
    assert_eq!(err.message, "failed to send gift");
    assert!(err.actions.is_empty());
    assert_eq!(err.signal, ErrorSignal::Session { code: 7002 });
}

#[test]
fn connection_full_scenario_ignores_message() {
    for message in ["joining", "", "some totally unrelated context"] {
        let err = normalize(
            ErrorSignal::new(Domain::Connection, ConnectionCode::Full as i32),
            message,
            Vec::new(),
            &KeyEcho,
        );
        assert_eq!(err.localized_text, "live.error.connection.full");
    }
}

#[test]
fn every_symbolic_code_maps_to_its_documented_key() {
    for code in BattleCode::iter() {
        let signal = ErrorSignal::new(Domain::Battle, code as i32);
        assert_eq!(signal.localization_key(), code.localization_key());
    }
    for code in ConnectionCode::iter() {
        let signal = ErrorSignal::new(Domain::Connection, code as i32);
        assert_eq!(signal.localization_key(), code.localization_key());
    }
    for code in SessionCode::iter() {
        let signal = ErrorSignal::new(Domain::Session, code as i32);
        assert_eq!(signal.localization_key(), code.localization_key());
    }
    for code in EngineCode::iter() {
        let signal = ErrorSignal::new(Domain::Engine, code as i32);
        assert_eq!(signal.localization_key(), code.localization_key());
    }
}

#[test]
fn fallback_covers_codes_no_enum_names() {
    // A sweep of values around the known families must never panic and must
    // always land on a non-empty key.
    for domain in Domain::iter() {
        for code in (-2500..=10).step_by(7).chain([7001, 7002, 7003, 99999]) {
            let key = ErrorSignal::new(domain, code).localization_key();
            assert!(!key.is_empty(), "{domain}({code}) resolved to empty key");
        }
    }
}

#[test]
fn normalization_is_pure_and_repeatable() {
    let make = || {
        normalize(
            ErrorSignal::new(Domain::Engine, EngineCode::SeatLocked as i32),
            "taking seat 3",
            vec![ActionDescriptor::RefreshSeatList],
            &KeyEcho,
        )
    };
    assert_eq!(make(), make());
}
