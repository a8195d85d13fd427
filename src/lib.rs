pub mod cache;
pub mod charts;
pub mod cli;
pub mod config;
pub mod datasets;
pub mod domain;
pub mod exclusions;
pub mod http;
pub mod services;
pub mod stats;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::analysis::AnalysisService;
use crate::services::fetch::FetchService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_fetch() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = FetchService::new(config)?;
        service.run().await
    })
}

pub fn handle_analyze(smoothed: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = AnalysisService::new(config)?;
        service.run(smoothed).await
    })
}
