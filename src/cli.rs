use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use hello_world_rs::a11y::{self, ContrastReport};
use hello_world_rs::greeting::{self, GreetingStyle, Language};
use hello_world_rs::settings::{FileStore, FontSize};
use hello_world_rs::{AccessibleHelloWorldApp, HelloWorldComponent};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hello-world-rs",
    about = "Accessible Hello World server and greeting toolkit",
    version
)]
pub struct Cli {
    /// Emit JSON instead of human-readable tables.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server.
    #[cfg(feature = "web")]
    Serve(ServeArgs),
    /// Print a greeting.
    Greet {
        /// Visitor name; defaults to "World".
        #[arg(short, long)]
        name: Option<String>,
        /// Language code (en, es, fr, de, it, pt, ru, ja, zh, ar).
        #[arg(short, long)]
        language: Option<Language>,
        /// Greeting style (formal, casual, enthusiastic).
        #[arg(short, long, conflicts_with = "language")]
        style: Option<GreetingStyle>,
    },
    /// List the supported languages.
    Languages,
    /// Check the WCAG contrast ratio between two colors.
    Contrast {
        /// Foreground color (#rgb, #rrggbb, rgb(r, g, b) or a CSS name).
        foreground: String,
        /// Background color.
        background: String,
    },
    /// Inspect or change persisted accessibility settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[cfg(feature = "web")]
#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: std::net::IpAddr,
    /// Runtime environment (development, production, test).
    #[arg(long, env = "NODE_ENV", default_value = "development")]
    environment: hello_world_rs::web::Environment,
    /// Allowed CORS origin; `*` allows any.
    #[arg(long, env = "FRONTEND_URL", default_value = "*")]
    frontend_url: String,
    /// Directory served ahead of the embedded assets.
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Show the stored settings.
    Show {
        #[arg(long, env = "HELLO_SETTINGS_FILE", default_value = "hello-world-settings.json")]
        store: PathBuf,
    },
    /// Update one or more settings and save them.
    Set {
        #[arg(long, env = "HELLO_SETTINGS_FILE", default_value = "hello-world-settings.json")]
        store: PathBuf,
        #[arg(long)]
        reduced_motion: Option<bool>,
        #[arg(long)]
        high_contrast: Option<bool>,
        #[arg(long)]
        font_size: Option<FontSize>,
    },
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        #[cfg(feature = "web")]
        Command::Serve(args) => handle_serve(args),
        Command::Greet {
            name,
            language,
            style,
        } => handle_greet(name, language, style, cli.json),
        Command::Languages => handle_languages(cli.json),
        Command::Contrast {
            foreground,
            background,
        } => handle_contrast(&foreground, &background, cli.json),
        Command::Settings(SettingsCommand::Show { store }) => handle_settings_show(store, cli.json),
        Command::Settings(SettingsCommand::Set {
            store,
            reduced_motion,
            high_contrast,
            font_size,
        }) => handle_settings_set(store, reduced_motion, high_contrast, font_size, cli.json),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "web")]
fn handle_serve(args: ServeArgs) -> Result<(), Box<dyn Error>> {
    use hello_world_rs::web::{self, WebConfig};

    let config = WebConfig {
        addr: std::net::SocketAddr::new(args.host, args.port),
        environment: args.environment,
        frontend_url: args.frontend_url,
        static_dir: args.static_dir,
    };
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(web::serve(config))?;
    Ok(())
}

fn handle_greet(
    name: Option<String>,
    language: Option<Language>,
    style: Option<GreetingStyle>,
    as_json: bool,
) -> Result<(), Box<dyn Error>> {
    let name = name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
    let message = match (style, language) {
        (Some(style), _) => {
            if let Some(name) = &name {
                greeting::validate_form_name(name)?;
            }
            style.render(name.as_deref())
        }
        (None, Some(language)) if language.component_phrases().is_some() => {
            let mut component = HelloWorldComponent::new();
            component.set_language(language);
            component.input(name.as_deref().unwrap_or_default());
            match &name {
                Some(_) => component.greet(&mut rand::thread_rng())?,
                None => component.text().to_string(),
            }
        }
        (None, Some(language)) => {
            if name.is_some() {
                debug!(%language, "language has no personalised greeting, ignoring name");
            }
            language.demo_greeting().text.to_string()
        }
        (None, None) => greeting::hello_message(name.as_deref()),
    };

    if as_json {
        let payload = json!({
            "message": message,
            "name": name,
            "language": language,
            "style": style,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{message}");
    }
    Ok(())
}

fn handle_languages(as_json: bool) -> Result<(), Box<dyn Error>> {
    if as_json {
        let payload: Vec<_> = Language::ALL
            .iter()
            .map(|lang| {
                json!({
                    "code": lang.code(),
                    "name": lang.native_name(),
                    "direction": lang.direction(),
                    "greeting": lang.demo_greeting().text,
                    "component": lang.component_phrases().is_some(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let width = Language::ALL
        .iter()
        .map(|lang| lang.native_name().chars().count())
        .max()
        .unwrap_or(4)
        .max("NAME".len());
    println!("CODE  {:<width$}  DIR  GREETING", "NAME", width = width);
    println!("----  {:-<width$}  ---  --------", "", width = width);
    for lang in Language::ALL {
        let name = lang.native_name();
        let pad = width - name.chars().count();
        println!(
            "{:<4}  {}{}  {}  {}",
            lang.code(),
            name,
            " ".repeat(pad),
            lang.direction(),
            lang.demo_greeting().text
        );
    }
    Ok(())
}

fn handle_contrast(foreground: &str, background: &str, as_json: bool) -> Result<(), Box<dyn Error>> {
    let fg = a11y::Rgb::parse(foreground)?;
    let bg = a11y::Rgb::parse(background)?;
    let report = a11y::contrast(fg, bg);

    if as_json {
        let payload = json!({
            "foreground": fg.to_hex(),
            "background": bg.to_hex(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_contrast(fg, bg, &report);
    }
    Ok(())
}

fn print_contrast(fg: a11y::Rgb, bg: a11y::Rgb, report: &ContrastReport) {
    let mark = |pass: bool| if pass { "pass" } else { "fail" };
    println!("{fg} on {bg}: {:.2}:1", report.ratio);
    println!("{:<10}  {}", "LEVEL", "RESULT");
    println!("{:-<10}  {}", "", "------");
    println!("{:<10}  {}", "AA", mark(report.aa));
    println!("{:<10}  {}", "AAA", mark(report.aaa));
    println!("{:<10}  {}", "AA large", mark(report.aa_large));
}

fn handle_settings_show(store: PathBuf, as_json: bool) -> Result<(), Box<dyn Error>> {
    let app = AccessibleHelloWorldApp::new(FileStore::open(&store)?);
    let settings = app.settings();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        println!("Settings file: {}", store.display());
        println!("Reduced motion: {}", settings.reduced_motion);
        println!("High contrast:  {}", settings.high_contrast);
        println!("Font size:      {}", settings.font_size);
        let classes = app.body_classes();
        if !classes.is_empty() {
            println!("Body classes:   {}", classes.join(" "));
        }
    }
    Ok(())
}

fn handle_settings_set(
    store: PathBuf,
    reduced_motion: Option<bool>,
    high_contrast: Option<bool>,
    font_size: Option<FontSize>,
    as_json: bool,
) -> Result<(), Box<dyn Error>> {
    if reduced_motion.is_none() && high_contrast.is_none() && font_size.is_none() {
        return Err("Nothing to change: pass --reduced-motion, --high-contrast or --font-size".into());
    }
    let mut app = AccessibleHelloWorldApp::new(FileStore::open(&store)?);
    if let Some(enabled) = reduced_motion {
        app.set_reduced_motion(enabled);
    }
    if let Some(enabled) = high_contrast {
        app.set_high_contrast(enabled);
    }
    if let Some(size) = font_size {
        app.set_font_size(size);
    }

    if as_json {
        let payload = json!({
            "settings": app.settings(),
            "announcements": app.announcer().history(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for message in app.announcer().history() {
            println!("{message}");
        }
    }
    Ok(())
}
