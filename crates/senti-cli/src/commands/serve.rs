//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use senti_web::{FailureStatus, ServerConfig};

use super::CohereArgs;

/// HTTP status for failed classifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailureStatusArg {
    /// 200 with the error in the JSON body
    Ok,
    /// 502 with the same JSON body
    BadGateway,
}

impl From<FailureStatusArg> for FailureStatus {
    fn from(arg: FailureStatusArg) -> Self {
        match arg {
            FailureStatusArg::Ok => FailureStatus::Ok,
            FailureStatusArg::BadGateway => FailureStatus::BadGateway,
        }
    }
}

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Give up on a classification after this many seconds (no limit by default)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Status code used when classification fails
    #[arg(long, value_enum, default_value_t = FailureStatusArg::Ok)]
    pub failure_status: FailureStatusArg,

    /// Directory holding the browser front-end, served at /
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    #[command(flatten)]
    pub cohere: CohereArgs,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (default: logs/senti-serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            timeout: self.timeout_secs.map(Duration::from_secs),
            failure_status: self.failure_status.into(),
            static_dir: self.static_dir.clone(),
        }
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    // Credentials are checked before anything is bound.
    let client = Arc::new(args.cohere.build_client()?);
    let config = args.server_config();

    println!();
    println!("  {} {}", "Senti".cyan().bold(), "Sentiment Gateway".bold());
    println!();
    println!(
        "  {}  http://{}:{}/analyze",
        "Analyze".green(),
        config.host,
        config.port
    );
    if let Some(dir) = &config.static_dir {
        println!(
            "  {}      http://{}:{}/ ({})",
            "Web".green(),
            config.host,
            config.port,
            dir.display()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    senti_web::run_server(client, config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Cli, Commands};
    use clap::Parser;

    fn parse_serve(args: &[&str]) -> ServeArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Serve(args) => args,
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let args = parse_serve(&["senti", "serve"]);
        let config = args.server_config();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.timeout, None);
        assert_eq!(config.failure_status, FailureStatus::Ok);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_serve_options() {
        let args = parse_serve(&[
            "senti",
            "serve",
            "--port",
            "9000",
            "--timeout-secs",
            "15",
            "--failure-status",
            "bad-gateway",
            "--static-dir",
            "static",
        ]);
        let config = args.server_config();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.failure_status, FailureStatus::BadGateway);
        assert_eq!(config.static_dir, Some(PathBuf::from("static")));
    }

    #[test]
    fn test_unknown_failure_status_rejected() {
        assert!(Cli::try_parse_from(["senti", "serve", "--failure-status", "teapot"]).is_err());
    }
}
