use chrono::Local;
use clap::Parser;
use dnsprobe_domain::{CliOverrides, DnsQuery};
use tracing::{debug, error};

mod bootstrap;
mod di;
mod report;

#[derive(Parser)]
#[command(name = "dnsprobe")]
#[command(version)]
#[command(about = "dnsprobe - send one DNS query over UDP and print the decoded response")]
struct Cli {
    /// Domain to query
    domain: String,

    /// Record type to look up (A, AAAA, MX, ...)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    record_type: Option<String>,

    /// Resolver to query, as IP:PORT
    #[arg(short = 's', long, value_name = "ADDR")]
    server: Option<String>,

    /// Per-operation timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Clear the recursion desired flag
    #[arg(long)]
    no_recurse: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        record_type: cli.record_type.clone(),
        timeout_ms: cli.timeout_ms,
        recursion_desired: cli.no_recurse.then_some(false),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config)?;

    let record_type = config.record_type()?;
    let query = DnsQuery::new(cli.domain.as_str(), record_type)
        .with_recursion(config.client.recursion_desired);

    debug!(domain = %query.domain, %record_type, "Starting lookup");

    let lookup = di::build_lookup(&config)?;
    let outcome = match lookup.execute(&query).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, domain = %query.domain, "Lookup failed");
            return Err(e.into());
        }
    };

    let report = report::Report {
        domain: &cli.domain,
        record_type,
        server: outcome.server,
        when: Local::now().fixed_offset(),
        response: &outcome.response,
    };
    println!("{}", report.render());

    Ok(())
}
