//! Runs the client against an in-process virtual card whose counter is kept
//! in a file, so the protocol can be exercised without a reader.

use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use tracing::{debug, info};
use universe_applet::{FileStore, HelloUniverseApplet, VirtualCard};
use universe_cli::{ClientArgs, MISSING_IDENTIFIER_EXIT, prepare, setup_logging};
use universe_client::{SessionConfig, VirtualTerminals};
use universe_protocol::Aid;

const READER: &str = "Hello Universe Virtual Reader";

#[derive(Parser)]
#[command(version, about = "Run the Hello Universe client against a simulated card")]
struct Cli {
    #[command(flatten)]
    client: ClientArgs,

    /// File holding the simulated card's access counter
    #[arg(long, default_value = "hello-universe.counter")]
    store: PathBuf,

    /// AID the applet is installed under, in hex (defaults to the requested AID)
    #[arg(long)]
    installed_aid: Option<Aid>,

    /// Seconds to wait for a card to be presented
    #[arg(short, long, default_value_t = 15)]
    timeout: u64,

    /// Debug level output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(if cli.verbose { "debug" } else { "warn" });

    let config = SessionConfig::new().with_card_timeout(Duration::from_secs(cli.timeout));
    let Some((mut session, request)) = prepare(&cli.client, config)? else {
        return Ok(ExitCode::from(MISSING_IDENTIFIER_EXIT));
    };

    let installed = cli.installed_aid.unwrap_or_else(|| request.aid.clone());
    info!("Installing applet as {} with counter in {}", installed, cli.store.display());

    let applet = HelloUniverseApplet::new(FileStore::new(&cli.store))?;
    let mut terminals = VirtualTerminals::with_card_present(READER, VirtualCard::new(applet, installed));

    let outcome = session.run(&mut terminals, &request)?;
    debug!(?outcome, "Session finished");

    Ok(ExitCode::SUCCESS)
}
