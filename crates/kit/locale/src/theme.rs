//! Theme resolution.

/// UI theme buckets.
///
/// Persisted values use the canonical `LIGHT`/`DARK` strings; the legacy
/// `white`/`black` values written by earlier releases still parse.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    #[default]
    #[strum(to_string = "LIGHT", serialize = "white")]
    Light,
    #[strum(to_string = "DARK", serialize = "black")]
    Dark,
}

/// Resolves the theme from a persisted preference.
///
/// Unset and unrecognized values both resolve to [`Theme::Light`].
pub fn resolve_theme(stored: Option<&str>) -> Theme {
    stored
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or_default()
}
