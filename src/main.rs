// Heatmap Calendar CLI
// Reads observations and settings, prints the render payload as JSON

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use heatmap_calendar::services::observations::load_observations;
use heatmap_calendar::services::settings::SettingsService;
use heatmap_calendar::{HeatmapCalendar, HeatmapView, RangeSelection};

const USAGE: &str = "usage: heatmap-calendar <observations.json> [--view month|year] \
[--range START END] [--config FILE] [--compact]";

#[derive(Debug, Default)]
struct Args {
    observations: Option<PathBuf>,
    view: Option<HeatmapView>,
    range: Option<(String, String)>,
    config: Option<PathBuf>,
    compact: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--view" => {
                let value = args.next().context("--view needs a value")?;
                parsed.view = Some(value.parse()?);
            }
            "--range" => {
                let start = args.next().context("--range needs START and END")?;
                let end = args.next().context("--range needs START and END")?;
                parsed.range = Some((start, end));
            }
            "--config" => {
                let path = args.next().context("--config needs a file path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--compact" => parsed.compact = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("unknown option '{}'\n{}", other, USAGE),
            other => {
                if parsed.observations.is_some() {
                    bail!("unexpected argument '{}'\n{}", other, USAGE);
                }
                parsed.observations = Some(PathBuf::from(other));
            }
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Heatmap Calendar");

    let args = parse_args(std::env::args().skip(1))?;
    let Some(observations_path) = args.observations else {
        bail!("missing observations file\n{}", USAGE);
    };

    let settings_service = match args.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::with_default_path(),
    };
    let settings = settings_service.get()?;
    let observations = load_observations(&observations_path)?;

    let view = args.view.unwrap_or(settings.view);
    let selection = match &args.range {
        Some((start, end)) => RangeSelection::parse(view, Some(start.as_str()), Some(end.as_str()))?,
        None => RangeSelection::View(view),
    };

    let calendar = HeatmapCalendar::from_settings(&settings);
    let heatmap = calendar.render(&observations, selection);
    log::info!(
        "Rendered {} week columns, {} month labels",
        heatmap.grid.week_count(),
        heatmap.month_labels.len()
    );

    let output = if args.compact {
        serde_json::to_string(&heatmap)?
    } else {
        serde_json::to_string_pretty(&heatmap)?
    };
    println!("{output}");

    Ok(())
}
