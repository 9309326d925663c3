//! Active-language resolution.

/// Languages the kit ships catalogs for.
///
/// Every locale tag is bucketed into one of these two: anything starting
/// with `zh` is Simplified Chinese, everything else is English. Finer
/// regional variants are intentionally not modeled.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum Language {
    #[default]
    #[strum(to_string = "en-US")]
    English,
    #[strum(to_string = "zh-CN")]
    SimplifiedChinese,
}

impl Language {
    /// Canonical BCP 47 tag for this bucket.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::SimplifiedChinese => "zh-CN",
        }
    }

    /// Buckets an arbitrary locale tag.
    ///
    /// Underscore separators are normalized to hyphens and comparison is
    /// case-insensitive, so `zh_CN`, `zh-Hans-CN`, and `ZH` all land in the
    /// Chinese bucket.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        if normalized.starts_with("zh") {
            Self::SimplifiedChinese
        } else {
            Self::English
        }
    }
}

/// Resolves the active language from its sources, in priority order:
/// explicit query parameter, persisted preference, platform-reported
/// default, fixed `en-US` default. Blank values are treated as absent.
pub fn resolve_language(
    query: Option<&str>,
    stored: Option<&str>,
    system: Option<&str>,
) -> Language {
    fn present(value: Option<&str>) -> Option<&str> {
        value.filter(|tag| !tag.trim().is_empty())
    }
    present(query)
        .or_else(|| present(stored))
        .or_else(|| present(system))
        .map_or_else(Language::default, Language::from_tag)
}
