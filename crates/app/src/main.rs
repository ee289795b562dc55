use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use prep_core::model::Language;
use services::{AppServices, CatalogService, Clock, LeaderboardService, QuizConfig, QuizLoopService};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://prep.sqlite3";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLanguage { raw: String },
    InvalidDbUrl { raw: String },
    HelpRequested,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --lang value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::HelpRequested => f.write_str("help requested"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    language: Language,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn language(&self) -> Language {
        self.language
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }

    fn leaderboard(&self) -> Arc<LeaderboardService> {
        self.services.leaderboard()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    language: Language,
    player: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>] [--lang es|en] [--player <name>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --lang es");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PREP_DB_URL, PREP_LANG, PREP_PLAYER, RUST_LOG");
}

impl Args {
    /// Parses flags after the optional `ui` subcommand. `env` supplies the
    /// `PREP_*` fallbacks so the parser can be driven without the process environment.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env("PREP_DB_URL")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut language = match env("PREP_LANG") {
            Some(raw) => parse_language(raw)?,
            None => Language::default(),
        };
        let mut player = env("PREP_PLAYER");

        let mut args = args.peekable();
        if args.peek().map(String::as_str) == Some("ui") {
            args.next();
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--lang" => {
                    language = parse_language(require_value(&mut args, "--lang")?)?;
                }
                "--player" => {
                    player = Some(require_value(&mut args, "--player")?);
                }
                "--help" | "-h" => return Err(ArgsError::HelpRequested),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            language,
            player,
        })
    }

    fn quiz_config(&self) -> QuizConfig {
        let config = QuizConfig::default();
        match &self.player {
            Some(name) => config.with_player_name(name.as_str()),
            None => config,
        }
    }
}

fn parse_language(raw: String) -> Result<Language, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidLanguage { raw })
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |key| std::env::var(key).ok()) {
        Ok(parsed) => parsed,
        Err(ArgsError::HelpRequested) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing();

    // Open + migrate SQLite at startup; the leaderboard is the only durable state.
    prepare_sqlite_file(&parsed.db_url)?;
    let services =
        AppServices::new_sqlite(&parsed.db_url, Clock::system(), parsed.quiz_config()).await?;
    tracing::info!(
        db = %parsed.db_url,
        language = %parsed.language,
        player = %services.config().player_name,
        "launching desktop shell"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        language: parsed.language,
        services,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("PMP Prep")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut iter = argv.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter, |key| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.db_url, DEFAULT_DB_URL);
        assert_eq!(args.language, Language::Es);
        assert_eq!(args.player, None);
        assert_eq!(args.quiz_config().player_name, "Guest User");
    }

    #[test]
    fn flags_override_env() {
        let args = parse(
            &["ui", "--lang", "en", "--player", "Ana", "--db", "sqlite://x.db"],
            &[("PREP_LANG", "es"), ("PREP_PLAYER", "Env"), ("PREP_DB_URL", "sqlite://y.db")],
        )
        .unwrap();
        assert_eq!(args.db_url, "sqlite://x.db");
        assert_eq!(args.language, Language::En);
        assert_eq!(args.quiz_config().player_name, "Ana");
    }

    #[test]
    fn env_supplies_defaults() {
        let args = parse(&[], &[("PREP_LANG", "EN"), ("PREP_PLAYER", "Env")]).unwrap();
        assert_eq!(args.language, Language::En);
        assert_eq!(args.player.as_deref(), Some("Env"));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&["--lang", "fr"], &[]).unwrap_err(),
            ArgsError::InvalidLanguage { raw: "fr".into() }
        );
        assert_eq!(
            parse(&["--db"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--db" }
        );
        assert_eq!(
            parse(&["--verbose"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--verbose".into())
        );
        assert_eq!(parse(&["-h"], &[]).unwrap_err(), ArgsError::HelpRequested);
    }

    #[test]
    fn relative_paths_become_absolute_urls() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
        let url = normalize_sqlite_url("sqlite:data/prep.db".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/prep.db"), "{url}");
    }
}
