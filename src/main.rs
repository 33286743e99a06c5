//! circuit-tutor - resistor circuit diagrams from the command line
//!
//! Renders exercise circuits to SVG and checks them for structural errors.
//!
//! # Usage
//!
//! ```bash
//! circuit-tutor render exercise.json --width 700 --height 350 -o circuit.svg
//! circuit-tutor check reply.txt
//! ```

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use circuit_tutor_core::{
    circuit::validate_circuit,
    error::{Result, TutorError},
    exercise,
    layout::{layout_circuit, LayoutMode},
    render::render,
    CircuitData, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use tracing::Level;

/// Resistor circuit diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a circuit to SVG
    Render {
        /// Circuit JSON, exercise JSON, or a service reply containing either
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: f64,

        /// Canvas height in pixels
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: f64,

        /// Write the SVG here instead of stdout
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Refuse to render circuits that fail validation
        #[arg(long)]
        strict: bool,
    },

    /// Validate a circuit and print a summary
    Check {
        /// Circuit JSON, exercise JSON, or a service reply containing either
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_circuit(path: &Path) -> Result<CircuitData> {
    let content = std::fs::read_to_string(path).map_err(|e| TutorError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    exercise::parse_any_circuit(&content)
}

fn run_render(
    file: &Path,
    width: f64,
    height: f64,
    output: Option<&Path>,
    strict: bool,
) -> Result<()> {
    if !(width > 0.0 && height > 0.0) {
        return Err(TutorError::InvalidCanvas { width, height });
    }

    let circuit = load_circuit(file)?;
    if strict {
        validate_circuit(&circuit)?;
    }

    let layout = layout_circuit(&circuit, width, height);
    tracing::info!(
        "Laid out {} resistors ({:?}, scale {:.3})",
        layout.resistors().count(),
        layout.mode,
        layout.scale
    );
    let svg = render(&layout).to_svg();

    match output {
        Some(path) => std::fs::write(path, svg).map_err(|e| TutorError::OutputWriteError {
            path: path.display().to_string(),
            source: e,
        })?,
        None => println!("{}", svg),
    }

    Ok(())
}

fn run_check(file: &Path) -> Result<()> {
    let circuit = load_circuit(file)?;
    validate_circuit(&circuit)?;

    let layout = layout_circuit(&circuit, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    println!("{}: OK", file.display());
    println!("  type:      {}", circuit.circuit_type);
    println!("  voltage:   {}", circuit.voltage.label());
    println!("  resistors: {}", circuit.resistors.len());
    match layout.mode {
        LayoutMode::Schematic => println!(
            "  layout:    {} elements, scale {:.3} at {}x{}",
            circuit.topology().map_or(0, |t| t.len()),
            layout.scale,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT
        ),
        LayoutMode::Fallback => println!("  layout:    none (text fallback)"),
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Render {
            file,
            width,
            height,
            output,
            strict,
        } => run_render(&file, width, height, output.as_deref(), strict),
        Command::Check { file } => run_check(&file),
    }
}
