use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{bail, eyre, WrapErr};
use color_eyre::Result;
use log::{error, info};

use lgc_rs::compile::{compile_with, CompileOptions};
use lgc_rs::parser::DEFAULT_MAX_DEPTH;
use lgc_rs::render::{RenderConfig, Renderer};

const EXTENSION: &str = "lgc";

#[derive(Parser, Debug)]
#[command(name = "lgc")]
#[command(version, about = "Compile propositional formulas into truth tables")]
struct Cli {
    /// Formula files with the `.lgc` extension
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Show only rows that evaluate to true
    #[arg(short, long)]
    true_only: bool,

    /// Evaluate the formula as parsed, skipping simplification
    #[arg(long)]
    no_simplify: bool,

    /// Reject formulas nested deeper than this
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Also write the combined report to this file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the AST of each formula
    #[arg(long)]
    ast: bool,

    /// Print each formula in constructor notation
    #[arg(long)]
    transpile: bool,

    /// Logging verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for simplelog::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => simplelog::LevelFilter::Off,
            LogLevel::Error => simplelog::LevelFilter::Error,
            LogLevel::Warn => simplelog::LevelFilter::Warn,
            LogLevel::Info => simplelog::LevelFilter::Info,
            LogLevel::Debug => simplelog::LevelFilter::Debug,
            LogLevel::Trace => simplelog::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level.into(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let options = CompileOptions {
        simplify: !cli.no_simplify,
        max_depth: cli.max_depth,
    };
    let renderer = Renderer::new(RenderConfig {
        true_only: cli.true_only,
        show_negations: true,
        ..RenderConfig::default()
    });

    let mut report = String::new();
    let mut failed = 0;
    for path in cli.files.iter() {
        match process(path, &cli, &options, &renderer) {
            Ok(text) => {
                if cli.files.len() > 1 {
                    println!("─── {} ───", path.display());
                }
                print!("{}", text);
                report.push_str(&text);
            }
            Err(e) => {
                error!("{}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    if let Some(output) = &cli.output {
        fs::write(output, &report).wrap_err_with(|| format!("Failed to write {}", output.display()))?;
        info!("Report written to {}", output.display());
    }

    if failed > 0 {
        return Err(eyre!("{} of {} files failed", failed, cli.files.len()));
    }
    Ok(())
}

/// Compiles one file and returns its report.
fn process(path: &Path, cli: &Cli, options: &CompileOptions, renderer: &Renderer) -> Result<String> {
    if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
        bail!("expected a .{} file", EXTENSION);
    }
    let source = fs::read_to_string(path).wrap_err("Failed to read formula")?;
    info!("Compiling {}", path.display());

    let compilation = compile_with(&source, options)?;

    let mut text = renderer.render(&compilation);
    if cli.transpile {
        text.push_str(&compilation.transpiled);
        text.push('\n');
    }
    if cli.ast {
        text.push_str(&compilation.ast_dump);
    }
    Ok(text)
}
