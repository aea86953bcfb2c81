//! Filestash CLI - interactive shell over a SQLite file stash

use clap::Parser;
use std::path::PathBuf;
use filestash::config::{self, FilestashConfig};
use filestash::shell::{interrupt_channel, EditorReader, InterruptibleReader, Shell};
use filestash::storage::FileStore;
use filestash::ui::{Icons, Palette};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "filestash")]
#[command(version)]
#[command(about = "Keep file contents in a SQLite table and manage them interactively")]
#[command(long_about = r#"
Filestash opens databases/<name>.db in the working directory and starts a shell.

Commands inside the shell:
  help, ?   list commands
  add       store a file's text
  remove    delete a stored file by id
  show      print all stored files as a table
  write     write a stored file's text to a path

Press Ctrl-C to exit.
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Database name (file databases/<NAME>.db)
    #[arg(short, long)]
    database: Option<String>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = config::load_config(cli.config.as_deref())?.unwrap_or_default();
    let name = config.database_name(cli.database.as_deref())?;
    let db_path = database_path(&config, &name)?;
    config::ensure_db_dir(&db_path)?;

    tracing::info!("Opening database {}", db_path.display());
    let store = FileStore::open(&db_path)?;

    let interrupts = interrupt_channel()?;

    let mut stdout = std::io::stdout();
    let palette = Palette::for_terminal(console::Term::stdout().is_term());
    palette.info(
        &mut stdout,
        &format!("{} Database", Icons::DATABASE),
        &db_path.display().to_string(),
    )?;

    let mut reader = InterruptibleReader::spawn(EditorReader::new, interrupts);
    Shell::new(store)
        .with_palette(palette)
        .run(&mut reader, &mut stdout)?;
    Ok(())
}

fn database_path(config: &FilestashConfig, name: &str) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(config.database_path_in(&cwd, name))
}
