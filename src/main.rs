use clap::{Parser, Subcommand};
use hogwords_core::{
    config::{self, shellexpand, Config},
    layout::LayoutVariant,
    session::{resolve_role_at, Role},
};
use hogwords_i18n::{Language, TranslationMap};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hogwords",
    version,
    about = "Hogwords — session role gating and backend text translation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the role of the persisted session.
    Role {
        /// Session file (defaults to `session.path` from the config).
        #[arg(short, long)]
        session: Option<String>,
    },
    /// Show the page shell the persisted session gets.
    Layout {
        /// Session file (defaults to `session.path` from the config).
        #[arg(short, long)]
        session: Option<String>,
        /// Course id for the course-page navigation.
        #[arg(long)]
        course: Option<String>,
    },
    /// Translate backend text into the active language.
    Translate {
        /// Active language tag (defaults to `i18n.default_language`).
        #[arg(short, long)]
        lang: Option<String>,
        /// Extra translations to load on top of the built-in ones.
        #[arg(long)]
        overlay: Option<String>,
        /// The text to translate.
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Print the effective configuration.
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.hogwords.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Role { session } => {
            let role = session_role(&cfg, session);
            println!("{role}");
        }
        Commands::Layout { session, course } => {
            let role = session_role(&cfg, session);
            let layout = LayoutVariant::for_role(role);
            println!("role:   {role}");
            println!("layout: {}", layout.name());
            println!("home:   {}", layout.home_route());
            for link in layout.course_links(course.as_deref()) {
                println!("  {} -> {}", link.label, link.href);
            }
        }
        Commands::Translate {
            lang,
            overlay,
            text,
        } => {
            if text.is_empty() {
                anyhow::bail!("no text provided. Usage: hogwords translate [--lang ru] <text>");
            }
            let i18n = &cfg.i18n;
            let overlay = overlay
                .as_deref()
                .unwrap_or(&i18n.overlay)
                .trim()
                .to_string();
            let overlay = (!overlay.is_empty()).then(|| shellexpand(&overlay));
            let map = TranslationMap::load(
                &i18n.source_language,
                &i18n.target_language,
                overlay.as_deref(),
            )?;
            let requested = lang.as_deref().unwrap_or(&i18n.default_language).trim();
            let lang = if requested.is_empty() {
                map.source_language().to_string()
            } else {
                Language::parse(requested).tag().to_string()
            };
            let text = text.join(" ");
            println!("{}", map.translate(Some(&text), &lang));
        }
        Commands::Status => {
            println!("{} — Status\n", cfg.hogwords.name);
            println!("Config:        {}", cli.config);
            println!("Data dir:      {}", shellexpand(&cfg.hogwords.data_dir));
            println!("Session file:  {}", shellexpand(&cfg.session.path));
            println!(
                "Languages:     {} -> {} (default {})",
                cfg.i18n.source_language, cfg.i18n.target_language, cfg.i18n.default_language
            );
            if cfg.i18n.overlay.is_empty() {
                println!("Overlay:       none");
            } else {
                println!("Overlay:       {}", shellexpand(&cfg.i18n.overlay));
            }
        }
    }

    Ok(())
}

/// Open the session file and resolve its role.
///
/// An unreadable or malformed session file resolves like an empty one.
fn session_role(cfg: &Config, session: Option<String>) -> Role {
    let path = shellexpand(session.as_deref().unwrap_or(&cfg.session.path));
    let role = resolve_role_at(&path);
    info!("session {path} resolved to {role}");
    role
}
