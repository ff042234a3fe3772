pub mod demo;
pub mod process;
pub mod quote;

use std::sync::Arc;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use libris_core::policy::{CostPolicy, PremiumPolicy, StandardPolicy};

#[derive(Parser)]
#[command(name = "libris")]
#[command(about = "Library loan billing with swappable pricing policies.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; repeat for results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through records, policies and services with sample loans
    #[command(alias = "d")]
    Demo,
    /// Price a loan duration without recording anything
    #[command(alias = "q")]
    Quote {
        /// Number of days the book is kept
        #[arg(long, allow_negative_numbers = true)]
        days: i64,
        #[arg(short, long, value_enum, default_value_t = PolicyKind::All)]
        policy: PolicyKind,
    },
    /// Price, announce and optionally record a single loan
    #[command(alias = "p")]
    Process(ProcessArgs),
}

#[derive(Args)]
pub struct ProcessArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: String,
    #[arg(long)]
    pub isbn: String,
    #[arg(long)]
    pub borrower: String,
    #[arg(long, allow_negative_numbers = true)]
    pub days: i64,
    #[arg(short, long, value_enum, default_value_t = PolicyKind::Standard)]
    pub policy: PolicyKind,
    /// Also record the loan and report statistics
    #[arg(long)]
    pub full: bool,
}

/// Pricing policy chosen on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    Standard,
    Premium,
    /// Every known policy, one after the other
    All,
}

impl PolicyKind {
    /// Builds the concrete policies for this selection.
    pub fn policies(self) -> Vec<Arc<dyn CostPolicy>> {
        match self {
            PolicyKind::Standard => vec![Arc::new(StandardPolicy::new())],
            PolicyKind::Premium => vec![Arc::new(PremiumPolicy::new())],
            PolicyKind::All => vec![
                Arc::new(StandardPolicy::new()),
                Arc::new(PremiumPolicy::new()),
            ],
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
