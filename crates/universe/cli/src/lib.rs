//! Pieces shared by the `hello-universe` binaries
#![warn(missing_docs)]

use std::io::{self, StdoutLock};

use clap::Args;
use tracing_subscriber::EnvFilter;
use universe_client::{Error, Session, SessionConfig, SessionRequest};

/// Positional arguments of every client binary
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// HelloUniverse AID in hex; ids shorter than 9 characters are expanded
    pub aid: Option<String>,

    /// Pass `reset` to set the access counter back to zero
    pub action: Option<String>,
}

/// Install the log subscriber on stderr, leaving stdout to the report
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn setup_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(true)
        .init();
}

/// Start a session on stdout and validate the arguments
///
/// A missing identifier is reported on stderr and yields `None`, before any
/// reader is touched; the caller exits with status 1.
pub fn prepare(
    args: &ClientArgs,
    config: SessionConfig,
) -> Result<Option<(Session<StdoutLock<'static>>, SessionRequest)>, Error> {
    let mut session = Session::new(config, io::stdout().lock());

    match session.prepare(args.aid.as_deref(), args.action.as_deref()) {
        Ok(request) => Ok(Some((session, request))),
        Err(e @ Error::MissingIdentifier) => {
            eprintln!("{e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Exit status when no identifier was given
pub const MISSING_IDENTIFIER_EXIT: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        client: ClientArgs,
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::parse_from(["hello-universe", "c8e4a0c4", "reset"]);
        assert_eq!(cli.client.aid.as_deref(), Some("c8e4a0c4"));
        assert_eq!(cli.client.action.as_deref(), Some("reset"));
    }

    #[test]
    fn test_arguments_are_optional() {
        let cli = Cli::parse_from(["hello-universe"]);
        assert!(cli.client.aid.is_none());
        assert!(cli.client.action.is_none());
    }

    #[test]
    fn test_no_flags_accepted() {
        for flag in ["-t", "--timeout", "-v", "--verbose"] {
            assert!(Cli::try_parse_from(["hello-universe", "c8e4a0c4", flag]).is_err());
        }
    }
}
