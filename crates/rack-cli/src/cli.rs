//! Argument parsing and command dispatch for the `rack` binary.

use std::io::{self, Write};

use clap::{ArgAction, Args, Parser, Subcommand};
use rack_client::ApiVersion;
use reqwest::Url;
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

use crate::client::{AppContext, CliDependencies, CliResult};
use crate::commands::keypairs::{
    handle_keypair_create, handle_keypair_delete, handle_keypair_list, handle_keypair_show,
    handle_keypair_update,
};
use crate::logging::{LogFormat, LoggingConfig, init_logging, level_directives};
use crate::output::{CommandOutput, OutputFormat, OutputOptions, render};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RACK_URL: &str = "http://127.0.0.1:8088/v1";
const DEFAULT_API_VERSION: &str = "1";

/// Parses CLI arguments, executes the requested command, and reports errors
/// on stderr. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: level_directives(cli.debug),
        format: LogFormat::from_env(),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    let command_name = command_label(&cli.command);
    let trace_id = Uuid::new_v4().to_string();
    let span = info_span!("command", command = command_name, trace_id = %trace_id);

    let result = dispatch(cli, &trace_id, &mut io::stdout().lock())
        .instrument(span)
        .await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

/// Build the context, run one handler, and render its output to `out`.
pub(crate) async fn dispatch(cli: Cli, trace_id: &str, out: &mut impl Write) -> CliResult<()> {
    let deps = CliDependencies::from_cli(&cli, trace_id)?;
    let ctx = AppContext::new(deps, cli.gid)?;
    let options = OutputOptions {
        format: cli.format,
        columns: cli.columns,
    };
    debug!(gid = %ctx.gid, "dispatching keypair command");

    let output = match cli.command {
        Command::KeypairList => CommandOutput::Listing(handle_keypair_list(&ctx).await?),
        Command::KeypairShow(args) => CommandOutput::Record(handle_keypair_show(&ctx, args).await?),
        Command::KeypairCreate(args) => {
            CommandOutput::Record(handle_keypair_create(&ctx, args).await?)
        }
        Command::KeypairUpdate(args) => {
            CommandOutput::Record(handle_keypair_update(&ctx, args).await?)
        }
        Command::KeypairDelete(args) => {
            handle_keypair_delete(&ctx, args).await?;
            CommandOutput::Empty
        }
    };

    render(&output, &options, out)
}

#[derive(Parser, Debug)]
#[command(name = "rack", about = "Manage keypairs of a RACK group")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "RACK_URL",
        value_parser = parse_url,
        default_value = DEFAULT_RACK_URL,
        help = "Versioned RACK API endpoint"
    )]
    pub(crate) rack_url: Url,
    #[arg(
        long,
        global = true,
        env = "RACK_API_VERSION",
        value_parser = parse_api_version,
        default_value = DEFAULT_API_VERSION
    )]
    pub(crate) rack_api_version: ApiVersion,
    #[arg(long, global = true, env = "RACK_GID", help = "Group ID")]
    pub(crate) gid: Option<String>,
    #[arg(
        long,
        global = true,
        env = "RACK_HTTP_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(long, global = true, help = "Log HTTP requests and responses")]
    pub(crate) debug: bool,
    #[arg(
        short = 'f',
        long = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table
    )]
    pub(crate) format: OutputFormat,
    #[arg(
        short = 'c',
        long = "column",
        global = true,
        help = "Only print this column; may be repeated"
    )]
    pub(crate) columns: Vec<String>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print a list of all keypairs in the specified group.
    KeypairList,
    /// Show details about the given keypair.
    KeypairShow(KeypairShowArgs),
    /// Create a new keypair.
    KeypairCreate(KeypairCreateArgs),
    /// Update the specified keypair.
    KeypairUpdate(KeypairUpdateArgs),
    /// Delete the specified keypair.
    KeypairDelete(KeypairDeleteArgs),
}

#[derive(Args, Debug)]
pub(crate) struct KeypairShowArgs {
    #[arg(value_name = "KEYPAIR_ID", help = "Keypair ID", value_parser = parse_keypair_id)]
    pub(crate) keypair_id: String,
}

#[derive(Args, Debug)]
pub(crate) struct KeypairCreateArgs {
    #[arg(long, value_name = "NAME", help = "Name of the new keypair")]
    pub(crate) name: Option<String>,
    #[arg(
        long,
        value_name = "TRUE/FALSE",
        action = ArgAction::Set,
        value_parser = parse_bool_flag,
        default_value = "false",
        help = "Make the new keypair the group default"
    )]
    pub(crate) is_default: bool,
}

#[derive(Args, Debug)]
pub(crate) struct KeypairUpdateArgs {
    #[arg(value_name = "KEYPAIR_ID", help = "Keypair ID", value_parser = parse_keypair_id)]
    pub(crate) keypair_id: String,
    #[arg(
        long,
        value_name = "TRUE/FALSE",
        action = ArgAction::Set,
        value_parser = parse_bool_flag,
        required = true,
        help = "Make the keypair the group default"
    )]
    pub(crate) is_default: bool,
}

#[derive(Args, Debug)]
pub(crate) struct KeypairDeleteArgs {
    #[arg(value_name = "KEYPAIR_ID", help = "Keypair ID", value_parser = parse_keypair_id)]
    pub(crate) keypair_id: String,
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::KeypairList => "keypair_list",
        Command::KeypairShow(_) => "keypair_show",
        Command::KeypairCreate(_) => "keypair_create",
        Command::KeypairUpdate(_) => "keypair_update",
        Command::KeypairDelete(_) => "keypair_delete",
    }
}

/// Parse the API URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    let url = input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("invalid URL '{input}': scheme must be http or https"));
    }
    Ok(url)
}

/// Parse a keypair ID, rejecting values that cannot name a single resource.
pub(crate) fn parse_keypair_id(input: &str) -> Result<String, String> {
    if is_path_safe(input) {
        Ok(input.to_string())
    } else {
        Err(format!("'{input}' is not a valid keypair ID"))
    }
}

/// Empty, `.` and `..` collapse during URL normalization.
pub(crate) fn is_path_safe(segment: &str) -> bool {
    !matches!(segment, "" | "." | "..")
}

pub(crate) fn parse_api_version(input: &str) -> Result<ApiVersion, String> {
    input.parse::<ApiVersion>().map_err(|err| err.to_string())
}

/// Parse a boolean option value.
///
/// Accepts `1 t true on y yes` and `0 f false off n no`, case-insensitively.
pub(crate) fn parse_bool_flag(input: &str) -> Result<bool, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "on" | "y" | "yes" => Ok(true),
        "0" | "f" | "false" | "off" | "n" | "no" => Ok(false),
        other => Err(format!("'{other}' is not a boolean (expected true or false)")),
    }
}
