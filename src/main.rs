use anyhow::Result;
use clap::{Parser, Subcommand};
use durpad::app::AppState;
use durpad::domain::format_hours_minutes_seconds;
use durpad::persistence::{ensure_durpad_dir, init_local_durpad};
use durpad::picker::{ChangeListener, Snapshot};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "durpad")]
#[command(about = "Type a duration on a keypad, digit by digit, as HHMMSS", long_about = None)]
struct Cli {
    /// Data directory to use instead of a local .durpad or ~/.durpad
    #[arg(long, global = true)]
    dir: Option<PathBuf>,
    /// Print the duration after every change, not just the final one
    #[arg(long, global = true)]
    echo: bool,
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .durpad directory in the current directory
    Init,
    /// Show the current duration
    Show,
    /// Press keypad keys: digits ("5", "00"), "bs" for backspace, "clear"
    Press {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Set the duration from milliseconds
    Set {
        #[arg(allow_negative_numbers = true)]
        millis: i64,
    },
    /// Clear the entered duration
    Clear,
    /// Set the duration to the configured default
    Reset,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let current_dir = std::env::current_dir()?;
        let durpad_dir = init_local_durpad(&current_dir)?;
        println!("Initialized durpad directory: {}", durpad_dir.display());
        return Ok(());
    }

    let dir = ensure_durpad_dir(cli.dir.as_deref())?;
    tracing::debug!(dir = %dir.display(), "using durpad directory");

    let listener: Option<ChangeListener> = if cli.echo {
        Some(Box::new(|id: &str, duration: u64| {
            println!("{}: {}", id, format_hours_minutes_seconds(duration));
        }))
    } else {
        None
    };
    let mut app = AppState::load(&dir, listener)?;

    let result = match cli.command {
        Some(Commands::Press { keys }) => app.press(&keys),
        Some(Commands::Set { millis }) => app.set(millis),
        Some(Commands::Clear) => {
            app.clear();
            Ok(())
        }
        Some(Commands::Reset) => app.reset(),
        Some(Commands::Show) | Some(Commands::Init) | None => Ok(()),
    };

    // Save whatever was applied, even if a later key failed
    app.save()?;
    result?;

    print_snapshot(app.snapshot(), cli.json)
}

fn print_snapshot(snapshot: &Snapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
    } else {
        println!(
            "{}   {}  ({} ms)",
            snapshot.display(),
            snapshot.formatted(),
            snapshot.duration_ms
        );
    }
    Ok(())
}
