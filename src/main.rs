mod cli;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use cli::Cli;
use log_groups::GlobalInfra;
use log_groups::utils::{build_groups, format_log_line, parse_log_arg};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let logs = cli
        .logs
        .iter()
        .map(|arg| parse_log_arg(arg).context("Invalid --log value"))
        .collect::<anyhow::Result<Vec<_>>>()?;

    // Owned here; every group only borrows it.
    let infra = cli.infra.as_ref().map(|name| GlobalInfra {
        name: name.clone(),
        clusters: cli.cluster.clone(),
    });
    if let Some(infra) = &infra {
        info!(
            "Using infrastructure {} with {} clusters",
            infra,
            infra.clusters.len()
        );
    }

    let groups = build_groups(&cli.gids, &logs, cli.url.as_deref(), infra.as_ref());
    for group in &groups {
        debug!(
            "{}: {} logs, url={}, infra={}",
            group,
            group.logs.len(),
            group.url.as_deref().unwrap_or("-"),
            group
                .global_infra
                .map_or_else(|| "-".to_string(), |infra| infra.to_string())
        );
        println!("{}", group);
        if cli.show_logs {
            for entry in &group.logs {
                debug!("{} logged at {}", entry.source, entry.timestamp.to_rfc3339());
                println!("  {}", format_log_line(&group.gid, entry));
            }
        }
    }

    Ok(())
}
