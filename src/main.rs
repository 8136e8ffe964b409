use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rlc_phasor::calculation::{evaluate, parse_resistance, summary_text, Calculation};
use rlc_phasor::config::{CircuitConfig, WaveformWindow};
use rlc_phasor::constants::{DEFAULT_WINDOW_SAMPLES, DEFAULT_WINDOW_START, DEFAULT_WINDOW_STOP};
use rlc_phasor::errors::RlcError;
use rlc_phasor::sweep::{linspace, sweep_resistance, write_sweep_csv};
use rlc_phasor::synthesis::{write_phasor_csv, write_waveform_csv};

/// Series RLC circuit calculator (L = 16 mH, C = 150 µF, 230 V, 50 Hz)
#[derive(Parser)]
#[command(name = "rlc-phasor", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the circuit for one resistance value
    Calc {
        /// Resistance in ohms
        #[arg(allow_hyphen_values = true)]
        resistance: String,

        /// Number of waveform samples over the 0.1 s window
        #[arg(long, default_value_t = DEFAULT_WINDOW_SAMPLES)]
        samples: usize,

        /// Write voltage/current/power samples as CSV
        #[arg(long)]
        waveform_csv: Option<PathBuf>,

        /// Write phasor diagram vectors as CSV
        #[arg(long)]
        phasor_csv: Option<PathBuf>,
    },
    /// Tabulate the analysis across a range of resistances
    Sweep {
        /// First resistance in ohms
        #[arg(long, default_value_t = 0.0)]
        start: f64,

        /// Last resistance in ohms
        #[arg(long, default_value_t = 50.0)]
        stop: f64,

        /// Number of resistance values
        #[arg(long, default_value_t = 11)]
        points: usize,

        /// Output CSV path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = CircuitConfig::default();
    let result = match cli.command {
        Commands::Calc {
            resistance,
            samples,
            waveform_csv,
            phasor_csv,
        } => run_calc(
            &config,
            &resistance,
            samples,
            waveform_csv.as_deref(),
            phasor_csv.as_deref(),
        ),
        Commands::Sweep {
            start,
            stop,
            points,
            output,
        } => run_sweep(&config, start, stop, points, output.as_deref()),
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    })
}

fn run_calc(
    config: &CircuitConfig,
    input: &str,
    samples: usize,
    waveform_csv: Option<&Path>,
    phasor_csv: Option<&Path>,
) -> Result<ExitCode, RlcError> {
    let outcome = WaveformWindow::new(DEFAULT_WINDOW_START, DEFAULT_WINDOW_STOP, samples)
        .map_err(RlcError::from)
        .and_then(|window| {
            let resistance = parse_resistance(input)?;
            evaluate(resistance, config, &window)
        });

    println!("{}", summary_text(&outcome));
    let Ok(calc) = outcome else {
        return Ok(ExitCode::FAILURE);
    };

    if let Some(path) = waveform_csv {
        write_to(path, |w| write_waveform_csv(w, &calc.waveforms))?;
        tracing::info!(path = %path.display(), "wrote waveforms");
    }
    if let Some(path) = phasor_csv {
        write_to(path, |w| write_phasor_csv(w, &calc.phasors))?;
        tracing::info!(path = %path.display(), "wrote phasors");
    }
    print_extras(&calc);
    Ok(ExitCode::SUCCESS)
}

fn print_extras(calc: &Calculation) {
    let a = &calc.analysis;
    println!("Phase Angle: {:.2}°", a.phase_angle_degrees());
    if let Some(f0) = a.resonant_frequency {
        println!("Resonant Frequency: {f0:.2} Hz");
    }
    if let Some(q) = a.quality_factor {
        println!("Quality Factor: {q:.2}");
    }
}

fn run_sweep(
    config: &CircuitConfig,
    start: f64,
    stop: f64,
    points: usize,
    output: Option<&Path>,
) -> Result<ExitCode, RlcError> {
    let data = sweep_resistance(config, linspace(start, stop, points))?;
    match output {
        Some(path) => write_to(path, |w| write_sweep_csv(w, &data))?,
        None => {
            let stdout = io::stdout();
            write_sweep_csv(stdout.lock(), &data)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn write_to<F>(path: &Path, body: F) -> Result<(), RlcError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut w = BufWriter::new(File::create(path)?);
    body(&mut w)?;
    w.flush()?;
    Ok(())
}
