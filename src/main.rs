mod cli;

use clap::Parser;
use cli::{Args, Commands, ScanArgs};
use eyre::Result;
use serde::Serialize;
use std::path::PathBuf;
use verscan::{DirectoryResolver, ResolvedVersion, ResolverConfig, VersionResolver};

#[derive(Debug, Serialize)]
struct Report {
    latest: Option<ResolvedVersion>,
    latest_path: Option<PathBuf>,
    next_number: u64,
    next_name: String,
    next_full_name: Option<String>,
    next_path: Option<PathBuf>,
}

fn resolve(args: &ScanArgs) -> Result<Report> {
    let config = ResolverConfig::default()
        .padding(args.padding)
        .prefix(args.prefix.as_str())
        .initial_number(args.initial)
        .match_mode(args.match_mode())
        .version_key(args.key.clone());

    if !args.names.is_empty() {
        let resolver = VersionResolver::with_config(args.names.iter().cloned(), &args.pattern, &config);
        return Ok(Report {
            latest: resolver.latest_version()?,
            latest_path: None,
            next_number: resolver.next_version_number()?,
            next_name: resolver.next_version_name()?,
            next_full_name: resolver.next_full_name()?,
            next_path: None,
        });
    }

    let dir = match &args.dir {
        Some(d) => d.clone(),
        None => std::env::current_dir()?,
    };
    tracing::debug!(dir = %dir.display(), kind = %args.kind, "scanning directory");
    let resolver = DirectoryResolver::with_config(Some(dir), &args.pattern, &config, args.kind)?;
    Ok(Report {
        latest: resolver.latest_version()?,
        latest_path: resolver.latest_full_path()?,
        next_number: resolver.next_version_number()?,
        next_name: resolver.next_version_name()?,
        next_full_name: resolver.next_full_name()?,
        next_path: resolver.next_full_path()?,
    })
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let scan = args.command.scan_args();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match scan.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let report = resolve(scan)?;

    if scan.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match args.command {
        Commands::Latest(a) => {
            let Some(latest) = report.latest else {
                tracing::info!(pattern = %a.pattern, "no version found");
                return Ok(());
            };
            if !a.full {
                println!("{}", latest.name);
            } else if let Some(path) = report.latest_path {
                println!("{}", path.display());
            } else {
                println!("{}", latest.full_name);
            }
        }
        Commands::Next(a) => {
            if !a.full {
                println!("{}", report.next_name);
            } else if let Some(path) = report.next_path {
                println!("{}", path.display());
            } else if let Some(full_name) = report.next_full_name {
                println!("{full_name}");
            } else {
                tracing::info!("no existing version to derive a full name from");
                println!("{}", report.next_name);
            }
        }
    }

    Ok(())
}
