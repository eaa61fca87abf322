//! `hello-universe`: greet the applet on the first smart card presented to a
//! PC/SC reader, or reset its access counter.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use universe_apdu_transport_pcsc::PcscDeviceManager;
use universe_cli::{ClientArgs, MISSING_IDENTIFIER_EXIT, prepare, setup_logging};
use universe_client::SessionConfig;

#[derive(Parser)]
#[command(about = "Greet the Hello Universe applet and read its access counter")]
struct Cli {
    #[command(flatten)]
    client: ClientArgs,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging("warn");

    let Some((mut session, request)) = prepare(&cli.client, SessionConfig::default())? else {
        return Ok(ExitCode::from(MISSING_IDENTIFIER_EXIT));
    };

    let mut terminals = PcscDeviceManager::new()?;
    let outcome = session.run(&mut terminals, &request)?;
    debug!(?outcome, "Session finished");

    Ok(ExitCode::SUCCESS)
}
