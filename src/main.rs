mod cli;

use playrange::{config, snapshot};
use playrange_media::{buffer_info, filter_living_fragments, is_buffered};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "playrange=trace,playrange_media=trace".to_string()
        } else {
            "playrange=info,playrange_media=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info {
            snapshot,
            position,
            max_hole,
            json,
        } => show_info(&snapshot, cli.config.as_deref(), position, max_hole, json),
        Commands::Check { snapshot, position } => check_position(&snapshot, position),
        Commands::Filter { snapshot, json } => filter_fragments(&snapshot, json),
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("playrange {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn show_info(
    snapshot_path: &Path,
    config_path: Option<&Path>,
    position: f64,
    max_hole: Option<f64>,
    json: bool,
) -> Result<()> {
    let max_hole_duration = match max_hole {
        Some(hole) if !hole.is_finite() || hole < 0.0 => {
            anyhow::bail!("--max-hole must be a non-negative number of seconds, got {}", hole);
        }
        Some(hole) => hole,
        None => config::load_config_or_default(config_path)?.buffer.max_hole_duration,
    };

    let media = snapshot::load_snapshot(snapshot_path)?;
    if media.is_detached() {
        tracing::warn!("Media is detached, reporting nothing buffered");
    }

    let info = buffer_info(&media, position, max_hole_duration);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Position: {}", position);
        println!("Max hole: {}", max_hole_duration);
        println!("Buffered: {} s", info.len);
        println!("Start: {}", info.start);
        println!("End: {}", info.end);
        match info.next_start {
            Some(next) => println!("Next start: {}", next),
            None => println!("Next start: none"),
        }
    }

    Ok(())
}

fn check_position(snapshot_path: &Path, position: f64) -> Result<()> {
    let media = snapshot::load_snapshot(snapshot_path)?;

    if is_buffered(&media, position) {
        println!("{} is buffered", position);
    } else {
        println!("{} is not buffered", position);
    }

    Ok(())
}

fn filter_fragments(snapshot_path: &Path, json: bool) -> Result<()> {
    let media = snapshot::load_snapshot(snapshot_path)?;
    let living = filter_living_fragments(&media.fragments, &media);

    tracing::info!(
        "{} of {} fragments still buffered",
        living.len(),
        media.fragments.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&living)?);
    } else {
        for fragment in &living {
            println!(
                "sn={} [{}, {}]",
                fragment.sn, fragment.start_pts, fragment.end_pts
            );
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            config::load_config(p)?;
            println!("Configuration is valid: {:?}", p);
        }
        None => {
            let config = config::load_config_or_default(None)?;
            println!(
                "Configuration is valid (max_hole_duration = {})",
                config.buffer.max_hole_duration
            );
        }
    }

    Ok(())
}
