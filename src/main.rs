use plumb_deflection::utils::logging;
use plumb_deflection::{AngleFormat, AngleStrategy, DeflectionSurvey, Preset, SurveyConfig};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Estimate the plumb-line deviation at the foot of a conical mountain")]
struct Args {
    /// YAML survey configuration; overrides the preset.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = PresetArg::Default)]
    preset: PresetArg,

    /// Rock density in kg/m^3; repeat to evaluate several.
    #[arg(short, long = "density")]
    densities: Vec<f64>,

    #[arg(short, long, value_enum, default_value_t = StrategyArg::Exact)]
    strategy: StrategyArg,

    #[arg(short, long, value_enum, default_value_t = FormatArg::Degrees)]
    format: FormatArg,

    /// Print the sweep as a YAML document instead of text.
    #[arg(long)]
    yaml: bool,

    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PresetArg {
    Default,
    NarrowPeak,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Exact,
    SmallAngle,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Degrees,
    Dms,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Default => Preset::Default,
            PresetArg::NarrowPeak => Preset::NarrowPeak,
        }
    }
}

impl From<StrategyArg> for AngleStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exact => AngleStrategy::Exact,
            StrategyArg::SmallAngle => AngleStrategy::SmallAngle,
        }
    }
}

impl From<FormatArg> for AngleFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Degrees => AngleFormat::Degrees,
            FormatArg::Dms => AngleFormat::Dms,
        }
    }
}

fn load_config(args: &Args) -> Result<SurveyConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            SurveyConfig::from_yaml_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => SurveyConfig::from_preset(args.preset.into()),
    };
    if !args.densities.is_empty() {
        config.densities = args.densities.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)
        .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))?;

    let config = load_config(&args)?;
    let survey = DeflectionSurvey::new(config)?.with_strategy(args.strategy.into());
    let output = if args.yaml {
        survey.render_yaml()?
    } else {
        survey.render(args.format.into())?
    };
    print!("{output}");

    Ok(())
}
