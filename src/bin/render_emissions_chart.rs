use std::fs;
use std::io::Write;
use std::path::PathBuf;

use emissions_chart::api::{ChartConfig, EmissionsChart};
use emissions_chart::core::Dataset;
use emissions_chart::render::SvgRenderer;
use emissions_chart::telemetry::init_default_tracing;

const DEFAULT_INPUT_PATH: &str = "data.csv";
const DEFAULT_OUTPUT_PATH: &str = "chart.svg";

#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    snapshot_path: Option<PathBuf>,
    pointer: Option<(f64, f64)>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => ChartConfig::from_path(path).map_err(|err| err.to_string())?,
        None => ChartConfig::default(),
    };
    let dataset = Dataset::from_path(&args.input_path).map_err(|err| err.to_string())?;
    let record_count = dataset.len();

    let mut chart = EmissionsChart::new(SvgRenderer::new(), config, dataset)
        .map_err(|err| format!("chart init failed: {err}"))?;

    if let Some((x, y)) = args.pointer {
        chart.pointer_enter();
        let inside = chart
            .pointer_move_svg(x, y)
            .map_err(|err| format!("pointer tracking failed: {err}"))?;
        if !inside {
            eprintln!("warning: pointer ({x}, {y}) is outside the plot area");
        }
    }

    chart.render().map_err(|err| format!("render failed: {err}"))?;

    if let Some(path) = &args.snapshot_path {
        let json = chart.snapshot_json_pretty().map_err(|err| err.to_string())?;
        fs::write(path, json)
            .map_err(|err| format!("failed to write snapshot `{}`: {err}", path.display()))?;
    }

    let document = chart.into_renderer().into_document();
    if args.output_path.as_os_str() == "-" {
        std::io::stdout()
            .write_all(document.as_bytes())
            .map_err(|err| format!("failed to write svg to stdout: {err}"))?;
    } else {
        fs::write(&args.output_path, document).map_err(|err| {
            format!(
                "failed to write svg `{}`: {err}",
                args.output_path.display()
            )
        })?;
        eprintln!(
            "rendered {record_count} record(s) -> {}",
            args.output_path.display()
        );
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path = PathBuf::from(DEFAULT_INPUT_PATH);
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut config_path: Option<PathBuf> = None;
    let mut snapshot_path: Option<PathBuf> = None;
    let mut pointer: Option<(f64, f64)> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = PathBuf::from(value);
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--snapshot" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --snapshot".to_owned())?;
                snapshot_path = Some(PathBuf::from(value));
            }
            "--pointer" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --pointer".to_owned())?;
                pointer = Some(parse_pointer(&value)?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        input_path,
        output_path,
        config_path,
        snapshot_path,
        pointer,
    })
}

fn parse_pointer(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("--pointer expects `x,y`, got `{value}`"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid pointer x `{x}`: {err}"))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid pointer y `{y}`: {err}"))?;
    Ok((x, y))
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: render_emissions_chart [options]\n\nOptions:\n  --input <path>      CSV with year,population,co2 columns (default: {DEFAULT_INPUT_PATH})\n  --output <path>     SVG output path, `-` for stdout (default: {DEFAULT_OUTPUT_PATH})\n  --config <path>     JSON chart config\n  --snapshot <path>   Write a JSON state snapshot after rendering\n  --pointer <x,y>     Show the hover overlay for a pointer in SVG coordinates\n  -h, --help          Show this message"
    )
}
