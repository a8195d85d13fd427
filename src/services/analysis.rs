use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::cache::Cache;
use crate::charts;
use crate::config::settings::AppConfig;
use crate::datasets;
use crate::exclusions::ExclusionClient;
use crate::stats::{self, AnalysisReport, CategoryStat};

/// Orchestrates one analysis run: load the datasets, obtain the exclusion
/// set, run the pure aggregation pipeline, print the ranking, and render
/// the charts. Any failure aborts the run.
pub struct AnalysisService {
    config: AppConfig,
    cache: Cache,
}

impl AnalysisService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let cache = Cache::new(config.data.cache_dir)?;
        Ok(Self { config, cache })
    }

    pub async fn run(&self, smoothed: bool) -> Result<()> {
        info!("=== Starting Category Analysis ===\n");

        info!("Step 1: Loading datasets...");
        let businesses = datasets::load_businesses(self.config.data.business_path)?;
        let reviews = datasets::load_reviews(self.config.data.review_path)?;

        info!("Step 2: Loading exclusion set...");
        let client = ExclusionClient::new(&self.config.fetch)?;
        let exclusions = client.load_or_fetch(&self.cache).await?;

        info!("Step 3: Aggregating categories...");
        let report = stats::analyze_reviews(
            &businesses,
            &reviews,
            &exclusions,
            &self.config.analysis,
            smoothed,
        )?;
        info!("  → {} ranked categories\n", report.stats.len());

        self.print_report(&report);

        info!("Step 4: Rendering charts...");
        self.render_charts(&report)?;

        info!("=== Analysis Complete ===");
        Ok(())
    }

    fn print_report(&self, report: &AnalysisReport) {
        let region = self.config.analysis.region;
        println!(
            "The global review average for the state of {} is {:.2}",
            region, report.global_mean
        );
        println!();

        let header = if report.smoothed {
            format!(
                "{:<40} {:>10} {:>10} {:>10}",
                "Category", "Reviews", "Avg", "Smoothed"
            )
        } else {
            format!("{:<40} {:>10} {:>10}", "Category", "Reviews", "Avg")
        };
        println!("{}", header.bold());

        for stat in &report.stats {
            match stat.smoothed_rating {
                Some(value) => println!(
                    "{:<40} {:>10} {:>10.2} {:>10.2}",
                    stat.category, stat.review_count, stat.mean_rating, value
                ),
                None => println!(
                    "{:<40} {:>10} {:>10.2}",
                    stat.category, stat.review_count, stat.mean_rating
                ),
            }
        }
        println!();
    }

    fn render_charts(&self, report: &AnalysisReport) -> Result<()> {
        let settings = &self.config.charts;

        if report.stats.is_empty() {
            info!("  → No categories to chart, skipping");
            return Ok(());
        }

        fs::create_dir_all(settings.output_dir)
            .context("Failed to create chart output directory")?;

        let n = settings.slice_size;
        let full = to_entries(&report.stats);
        let top = to_entries(stats::top_slice(&report.stats, n));
        let bottom = to_entries(&stats::bottom_slice(&report.stats, n));

        self.render_one("full", &self.full_title(report), &full)?;
        self.render_one("top", &format!("Top {} {}", top.len(), self.scope_suffix(report)), &top)?;
        self.render_one(
            "bottom",
            &format!("Bottom {} {}", bottom.len(), self.scope_suffix(report)),
            &bottom,
        )?;

        Ok(())
    }

    fn render_one(&self, name: &str, title: &str, entries: &[(String, f64)]) -> Result<()> {
        let settings = &self.config.charts;
        let path: PathBuf = PathBuf::from(settings.output_dir).join(format!("{}.svg", name));
        let height = chart_height(entries.len(), settings.row_height);

        charts::render_bar_chart(&path, title, entries, settings.width, height)?;
        info!("  → Wrote {}", path.display());
        Ok(())
    }

    fn full_title(&self, report: &AnalysisReport) -> String {
        let region = self.config.analysis.region;
        if report.smoothed {
            format!("Categories in {} Ranked by Smoothed Average Stars", region)
        } else {
            format!(
                "Categories in {} with ≥{} Reviews Ranked by Average Stars",
                region, self.config.analysis.min_review_support
            )
        }
    }

    fn scope_suffix(&self, report: &AnalysisReport) -> String {
        let region = self.config.analysis.region;
        if report.smoothed {
            format!("Categories in {} (Smoothed)", region)
        } else {
            format!(
                "Categories in {} (≥{} Reviews)",
                region, self.config.analysis.min_review_support
            )
        }
    }
}

fn to_entries(stats: &[CategoryStat]) -> Vec<(String, f64)> {
    stats
        .iter()
        .map(|stat| (stat.category.clone(), stat.ranking_value()))
        .collect()
}

fn chart_height(rows: usize, row_height: u32) -> u32 {
    let body = rows as u32 * row_height;
    (120 + body).max(240)
}
