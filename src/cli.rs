use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "review-category-ranking")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Download the category exclusion list and store it in the local cache
    Fetch,
    /// Rank categories by average review rating and render the charts
    Analyze {
        /// Use bayesian smoothing instead of the minimum-support filter
        #[arg(short, long)]
        smoothed: bool,
    },
}
