//! Startup settings bundle.
use crate::language::{Language, resolve_language};
use crate::prefs::PreferenceStore;
use crate::query::query_param;
use crate::theme::{Theme, resolve_theme};

/// Query parameter carrying an explicit language override.
pub const LANG_PARAM: &str = "lang";

/// The two user-facing settings resolved when the kit starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserSettings {
    pub language: Language,
    pub theme: Theme,
}

impl UserSettings {
    /// Resolves language and theme from their sources.
    ///
    /// `url` contributes an optional `lang` query parameter, `prefs` the
    /// persisted values, `system_tag` the platform-reported locale.
    pub fn resolve(
        url: Option<&str>,
        prefs: &dyn PreferenceStore,
        system_tag: Option<&str>,
    ) -> Self {
        let query = url.and_then(|u| query_param(u, LANG_PARAM));
        Self {
            language: resolve_language(
                query.as_deref(),
                prefs.language().as_deref(),
                system_tag,
            ),
            theme: resolve_theme(prefs.theme().as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;

    #[test]
    fn url_overrides_stored_language_but_not_theme() {
        let prefs = MemoryPreferences::with(Some("en-US"), Some("black"));
        let settings = UserSettings::resolve(
            Some("https://host/live?lang=zh_CN"),
            &prefs,
            Some("en-US"),
        );
        assert_eq!(settings.language, Language::SimplifiedChinese);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn defaults_apply_with_no_sources() {
        let prefs = MemoryPreferences::new();
        let settings = UserSettings::resolve(None, &prefs, None);
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.theme, Theme::Light);
    }
}
