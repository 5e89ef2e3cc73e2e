//! CLI error types and the dependency context shared by command handlers.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use rack_client::{ClientConfig, KeypairsClient};

use crate::cli::{Cli, is_path_safe};

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Dependencies constructed from global CLI options.
#[derive(Clone)]
pub(crate) struct CliDependencies {
    pub(crate) keypairs: KeypairsClient,
}

impl CliDependencies {
    /// Construct the keypair client for this invocation.
    pub(crate) fn from_cli(cli: &Cli, trace_id: &str) -> CliResult<Self> {
        let keypairs = KeypairsClient::new(ClientConfig {
            base_url: cli.rack_url.clone(),
            version: cli.rack_api_version,
            timeout: Duration::from_secs(cli.timeout),
            request_id: trace_id.to_string(),
            http_log_debug: cli.debug,
        })
        .map_err(CliError::failure)?;
        Ok(Self { keypairs })
    }
}

/// Client handle bound to the group every keypair command operates on.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) keypairs: KeypairsClient,
    pub(crate) gid: String,
}

impl AppContext {
    /// Bind the client to a group, rejecting a missing or blank identifier.
    pub(crate) fn new(deps: CliDependencies, gid: Option<String>) -> CliResult<Self> {
        let gid = gid
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                CliError::validation("group ID is required (pass --gid or set RACK_GID)")
            })?;
        if !is_path_safe(&gid) {
            return Err(CliError::validation(format!(
                "'{gid}' is not a valid group ID"
            )));
        }
        Ok(Self {
            keypairs: deps.keypairs,
            gid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use reqwest::Client;

    fn deps() -> CliDependencies {
        CliDependencies {
            keypairs: KeypairsClient::with_http_client(
                Client::new(),
                "http://127.0.0.1:8088/v1".parse().expect("valid URL"),
            ),
        }
    }

    #[test]
    fn exit_codes_separate_validation_from_failure() {
        assert_eq!(CliError::validation("bad input").exit_code(), 2);
        assert_eq!(CliError::failure(anyhow!("boom")).exit_code(), 3);
    }

    #[test]
    fn failure_message_includes_source_chain() {
        let err = CliError::failure(anyhow!("connection refused").context("failed to list keypairs"));
        assert_eq!(
            err.display_message(),
            "failed to list keypairs: connection refused"
        );
    }

    #[test]
    fn context_requires_group_id() {
        for gid in [None, Some(String::new()), Some("   ".to_string())] {
            let err = AppContext::new(deps(), gid).err().expect("gid missing");
            assert!(matches!(err, CliError::Validation(message) if message.contains("--gid")));
        }
    }

    #[test]
    fn context_rejects_dot_group_ids() {
        for gid in [".", ".."] {
            let err = AppContext::new(deps(), Some(gid.into()))
                .err()
                .expect("dot segment rejected");
            assert!(matches!(err, CliError::Validation(message) if message.contains("group ID")));
        }
    }

    #[test]
    fn context_trims_group_id() {
        let ctx = AppContext::new(deps(), Some(" g-1 ".into())).expect("gid present");
        assert_eq!(ctx.gid, "g-1");
        assert_eq!(ctx.keypairs.base_url().as_str(), "http://127.0.0.1:8088/v1");
    }
}
