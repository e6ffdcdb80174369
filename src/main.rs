use std::path::PathBuf;

use clap::Parser;
use flashdeck::{console::Console, session::Session, types::config::Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Manage and study flashcard decks from the terminal")]
struct Cli {
	/// Read settings from this file instead of the per-user config
	#[arg(long)]
	config: Option<PathBuf>,

	/// Do not load or save line history
	#[arg(long)]
	no_history: bool,
}

fn init_tracing(default_filter: &str) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> eyre::Result<()> {
	color_eyre::install()?;

	let cli = Cli::parse();
	let config = Config::load(cli.config.as_deref())?;
	init_tracing(&config.log_filter);
	info!("Starting with {:?}", config);

	let mut console = Console::new(config.history && !cli.no_history)?;
	let mut session = Session::new(config);
	console.run(&mut session)?;

	Ok(())
}
