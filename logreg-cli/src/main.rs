//! logreg - command-line front end for logreg-core
//!
//! Evaluates the logistic transforms and runs threshold-neuron decisions.
//!
//! ## Environment Variables
//! - `RUST_LOG`: tracing filter (default: warn, or debug with `--verbose`)
//! - `LOGREG_CONFIG`: neuron config used by `classify` when `--config` is absent

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use logreg_core::prelude::*;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "logreg")]
#[command(author = "logreg contributors")]
#[command(version)]
#[command(about = "Logistic transforms and McCulloch-Pitts threshold neurons", long_about = None)]
struct Cli {
    /// Round floating-point results to N decimal places
    #[arg(short, long, global = true, value_name = "N")]
    precision: Option<usize>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Odds of probability P: P / (1 - P)
    Odds {
        #[arg(value_name = "P", allow_negative_numbers = true)]
        p: f64,
    },

    /// Natural log of a named transform of P
    Logit {
        #[arg(value_name = "P", allow_negative_numbers = true)]
        p: f64,

        /// Transform to take the logarithm of
        #[arg(short, long, default_value = "odds")]
        transform: String,
    },

    /// Logistic sigmoid of Z
    Sigmoid {
        #[arg(value_name = "Z", allow_negative_numbers = true)]
        z: f64,
    },

    /// Run a neuron decision on explicit weights and inputs
    Decide {
        /// Comma-separated weight vector
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        weights: Vec<f64>,

        /// Comma-separated input vector
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        inputs: Vec<f64>,

        /// Firing threshold
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: f64,

        /// Use the bias unit (decide_bias) and report true/false
        #[arg(short, long)]
        bias: bool,

        /// Scoring algorithm
        #[arg(short, long, default_value = "linear_algebra")]
        algorithm: String,
    },

    /// Run the neuron described by a config file on an input vector
    Classify {
        /// Neuron config (.toml)
        #[arg(short, long, value_name = "FILE", env = "LOGREG_CONFIG")]
        config: PathBuf,

        /// Comma-separated input vector
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        inputs: Vec<f64>,
    },

    /// List the members a component exposes
    Members {
        #[arg(value_enum)]
        target: Target,
    },

    /// Show information about logreg
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    Library,
    Neuron,
}

/// How results are written to stdout
struct Output {
    precision: Option<usize>,
    json: bool,
}

impl Output {
    fn number(&self, command: &str, value: f64) {
        println!("{}", self.render_number(command, value));
    }

    fn render_number(&self, command: &str, value: f64) -> String {
        let value = match self.precision {
            Some(digits) => round_to(value, digits),
            None => value,
        };
        if self.json {
            json!({ "command": command, "value": json_number(value) }).to_string()
        } else {
            value.to_string()
        }
    }

    fn decision(&self, command: &str, decision: Decision) {
        println!("{}", self.render_decision(command, decision));
    }

    fn render_decision(&self, command: &str, decision: Decision) -> String {
        if self.json {
            json!({ "command": command, "value": decision }).to_string()
        } else {
            decision.to_string()
        }
    }

    fn list(&self, type_name: &str, members: &[&str]) {
        if self.json {
            println!("{}", json!({ "type": type_name, "members": members }));
        } else {
            println!("{}", type_name.bold());
            for member in members {
                println!("  {}", member);
            }
        }
    }
}

/// JSON has no inf/NaN; those go out as the strings Rust prints for them.
fn json_number(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else {
        Value::String(value.to_string())
    }
}

/// Round to `digits` decimal places. Precisions too large to represent leave
/// the value untouched.
fn round_to(value: f64, digits: usize) -> f64 {
    let Ok(exponent) = i32::try_from(digits) else {
        return value;
    };
    let scale = 10f64.powi(exponent);
    let scaled = value * scale;
    if !scale.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "logreg=debug,logreg_core=debug"
    } else {
        "logreg=warn,logreg_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let out = Output {
        precision: cli.precision,
        json: cli.json,
    };

    if let Err(e) = run(cli.command, &out) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands, out: &Output) -> Result<()> {
    match command {
        Commands::Odds { p } => {
            out.number("odds", LogisticRegression::new().odds(p));
        }

        Commands::Logit { p, transform } => {
            let value = LogisticRegression::new().logit(p, &transform)?;
            out.number("logit", value);
        }

        Commands::Sigmoid { z } => {
            out.number("sigmoid", LogisticRegression::new().sigmoid(z));
        }

        Commands::Decide {
            weights,
            inputs,
            threshold,
            bias,
            algorithm,
        } => {
            decide_command(&weights, &inputs, threshold, bias, &algorithm, out)?;
        }

        Commands::Classify { config, inputs } => {
            classify_command(&config, &inputs, out)?;
        }

        Commands::Members { target } => match target {
            Target::Library => {
                let lr = LogisticRegression::new();
                out.list(lr.type_name(), &lr.members());
            }
            Target::Neuron => {
                let n = Neuron::new();
                out.list(n.type_name(), &n.members());
            }
        },

        Commands::Info => print_info(),
    }

    Ok(())
}

fn decide_command(
    weights: &[f64],
    inputs: &[f64],
    threshold: f64,
    bias: bool,
    algorithm: &str,
    out: &Output,
) -> Result<()> {
    let neuron = Neuron::with_algorithm(algorithm)?;
    tracing::debug!(algorithm, threshold, bias, "deciding");

    let decision = if bias {
        Decision::Biased(neuron.decide_bias(weights, inputs, threshold)?)
    } else {
        Decision::Fired(neuron.decide(weights, inputs, threshold)?)
    };
    out.decision("decide", decision);
    Ok(())
}

fn classify_command(path: &std::path::Path, inputs: &[f64], out: &Output) -> Result<()> {
    let config = NeuronConfig::from_file(path)
        .with_context(|| format!("loading neuron config {}", path.display()))?;
    let neuron = config.build()?;
    tracing::debug!(config = %path.display(), algorithm = neuron.algorithm(), "classifying");

    out.decision("classify", config.classify(&neuron, inputs)?);
    Ok(())
}

fn print_info() {
    println!("{}", "logreg - logistic transforms and threshold neurons".bold());
    println!();
    println!("{}", "Transforms (logit --transform NAME):".bold());
    for transform in Transform::ALL {
        println!("  • {} {}", "✓".green(), transform);
    }
    println!();
    println!("{}", "Neuron algorithms (decide --algorithm NAME):".bold());
    for algorithm in Algorithm::ALL {
        let marker = if algorithm == Algorithm::default() { " (default)" } else { "" };
        println!("  • {} {}{}", "✓".green(), algorithm, marker);
    }
    println!();
    println!("{}", "Commands:".bold());
    println!("  logreg odds 0.6                                   # 1.5");
    println!("  logreg logit 0.6 -p 3                             # 0.405");
    println!("  logreg sigmoid -2 -p 3                            # 0.119");
    println!("  logreg decide -w 1,1,0 -i 0.25,0.3,0.1 -t 0.5     # 1");
    println!("  logreg decide -w 1,1,0 -i 0.25,0.3,0.1 -t 0.5 -b  # true");
    println!("  logreg classify -c neuron.toml -i 0.25,0.3,0.1");
    println!("  logreg members library");
}
