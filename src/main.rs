use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tipcalc::domain::money::TipRate;
use tipcalc::interfaces::csv::event_reader::EventReader;
use tipcalc::interfaces::output::{OutputFormat, ScreenWriter};
use tipcalc::interfaces::screen::{ScreenConfig, TipScreen};
use tipcalc::interfaces::stepper::TipStepper;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// UI event CSV file (`event,value` rows). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Initial tip rate as a fraction, clamped to [0, 1].
    #[arg(long, default_value_t = TipRate::DEFAULT.value())]
    tip_rate: Decimal,

    /// Amount the stepper moves the rate per tap.
    #[arg(long, default_value_t = TipStepper::DEFAULT_STEP)]
    step: Decimal,

    /// Output style for screen updates.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut screen = TipScreen::new(ScreenConfig {
        tip_rate: cli.tip_rate,
        step: cli.step,
        ..ScreenConfig::default()
    });

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };
    let reader = EventReader::new(source);

    let stdout = io::stdout();
    let mut writer = ScreenWriter::new(stdout.lock(), cli.format);
    writer.write_update(&screen.initial_update()).into_diagnostic()?;

    for event_result in reader.events() {
        match event_result {
            Ok(event) => match screen.handle(event) {
                Ok(update) => writer.write_update(&update).into_diagnostic()?,
                Err(e) => eprintln!("Error processing event: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
