//! Live-room kit demo binary.
//!
//! Composition root that assembles the kit end to end:
//! 1. User settings (language, theme) from URL, preferences, and platform
//! 2. String catalog for the resolved language
//! 3. Error store worker behind an async reporter
//!
//! Error scenarios are then normalized and dispatched, and the surfaced
//! toasts are printed to stdout. Pass `domain:code[:message]` arguments to
//! replay specific failures:
//!
//! ```bash
//! streamkit connection:-103 "session:7002:failed to send gift"
//! ```
mod logging;

use anyhow::{Context, Result};
use kit_core::{ActionDescriptor, Domain, ErrorSignal, NormalizedError, normalize};
use kit_locale::{
    FilePreferences, LocaleCatalog, MemoryPreferences, PreferenceStore, UserSettings,
};
use kit_store::{ActionSink, ErrorStore, StoreConfig, spawn_error_worker};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = logging::setup();

    // 1. Resolve user settings from their three sources
    let url = std::env::var("STREAMKIT_URL").ok();
    let prefs = open_preferences();
    let system_tag = std::env::var("LANG").ok();
    let settings = UserSettings::resolve(url.as_deref(), prefs.as_ref(), system_tag.as_deref());

    tracing::info!(language = %settings.language, theme = %settings.theme, "resolved user settings");

    // 2. Load the string catalog for the resolved language
    let catalog =
        LocaleCatalog::load(settings.language).context("failed to load string catalog")?;

    // 3. Spawn the error store worker
    let config = StoreConfig::from_env();
    let store = ErrorStore::new(&config, LoggingSink);
    let (reporter, worker) = spawn_error_worker(store, config.channel_buffer);

    // 4. Normalize and dispatch the error scenarios
    let args: Vec<String> = std::env::args().skip(1).collect();
    let errors = if args.is_empty() {
        demo_scenarios(&catalog)
    } else {
        args.iter()
            .map(|spec| parse_spec(spec, &catalog))
            .collect::<Result<Vec<_>>>()?
    };
    for err in errors {
        reporter.report(err).await.context("store worker stopped")?;
    }

    // 5. Drain the worker and print what the user would have seen
    drop(reporter);
    let store = worker.await.context("store worker panicked")?;

    println!("surfaced {} toast(s):", store.toasts().len());
    for toast in store.toasts().iter() {
        println!("  [{}({})] {}", toast.domain, toast.code, toast.text);
    }

    Ok(())
}

/// Forwards dispatched actions to the log; a real app would map them onto
/// room operations.
struct LoggingSink;

impl ActionSink for LoggingSink {
    fn dispatch(&mut self, action: &ActionDescriptor) {
        tracing::info!(%action, "dispatching follow-up action");
    }
}

/// Opens the preference store, degrading to in-memory defaults when the
/// platform location is unavailable.
fn open_preferences() -> Box<dyn PreferenceStore> {
    let result = match std::env::var("STREAMKIT_PREFS_PATH") {
        Ok(path) => FilePreferences::open(path),
        Err(_) => FilePreferences::open_default(),
    };
    match result {
        Ok(prefs) => Box::new(prefs),
        Err(err) => {
            tracing::warn!("failed to open preferences: {err}. Continuing with defaults.");
            Box::new(MemoryPreferences::new())
        }
    }
}

/// Parses a `domain:code[:message]` argument.
fn parse_spec(spec: &str, catalog: &LocaleCatalog) -> Result<NormalizedError> {
    let mut parts = spec.splitn(3, ':');
    let domain = parts
        .next()
        .unwrap_or_default()
        .parse::<Domain>()
        .with_context(|| format!("unknown domain in {spec:?} (battle|connection|session|engine)"))?;
    let code: i32 = parts
        .next()
        .with_context(|| format!("missing code in {spec:?}"))?
        .parse()
        .with_context(|| format!("invalid code in {spec:?}"))?;
    let message = parts.next().unwrap_or("demo operation");
    Ok(normalize(
        ErrorSignal::new(domain, code),
        message,
        Vec::new(),
        catalog,
    ))
}

/// One failure per domain, with follow-up actions where a real room would
/// attach them.
fn demo_scenarios(catalog: &LocaleCatalog) -> Vec<NormalizedError> {
    vec![
        normalize(
            ErrorSignal::new(Domain::Session, 7002),
            "failed to send gift",
            Vec::new(),
            catalog,
        ),
        normalize(
            ErrorSignal::new(Domain::Connection, -103),
            "connecting to room 1001",
            vec![ActionDescriptor::Reconnect],
            catalog,
        ),
        normalize(
            ErrorSignal::new(Domain::Battle, -1301),
            "inviting anchor to battle",
            vec![
                ActionDescriptor::ExitBattle,
                ActionDescriptor::ReportError {
                    message: "battle invite failed twice".into(),
                },
            ],
            catalog,
        ),
        normalize(
            ErrorSignal::new(Domain::Engine, -2342),
            "taking seat 3",
            vec![ActionDescriptor::RefreshSeatList],
            catalog,
        ),
    ]
}
