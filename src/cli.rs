use clap::{Args, Parser, Subcommand};
use promoroi::core::InputOverrides;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "promoroi",
    version,
    about = "Promotion ROI calculator with uplift sensitivity"
)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute net impact, ROI, payback and sensitivity for one set of inputs
    Calc(CalcArgs),
    /// Compare scenarios side by side
    Compare(CompareArgs),
    /// List built-in and configured scenarios
    Presets(OutputArgs),
    /// Write a default promoroi.toml in the current directory
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub output: OutputArgs,
    #[arg(long)]
    pub scenario: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub baseline_revenue: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub uplift_pct: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub bonus_cost: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub churn_pct: Option<String>,
}

impl CalcArgs {
    pub fn overrides(&self) -> InputOverrides {
        InputOverrides {
            baseline_revenue: self.baseline_revenue.clone(),
            uplift_pct: self.uplift_pct.clone(),
            bonus_cost: self.bonus_cost.clone(),
            churn_pct: self.churn_pct.clone(),
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub output: OutputArgs,
    pub scenarios: Vec<String>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
