pub struct AnalysisSettings {
    /// Two-letter region code the business dataset is filtered to
    pub region: &'static str,
    /// Pseudo-count C in the bayesian smoothing formula
    pub smoothing_constant: f64,
    /// Minimum contributing reviews per category (raw variant only, inclusive)
    pub min_review_support: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            region: "CA",
            smoothing_constant: 100.0,
            min_review_support: 100,
        }
    }
}

pub struct FetchSettings {
    pub exclusion_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            exclusion_url:
                "https://raw.githubusercontent.com/cgio/global-ethnicities/master/output/ethnicities.json",
            user_agent: "ReviewCategoryRanking/1.0",
            timeout_secs: 30,
        }
    }
}

pub struct DataSettings {
    pub business_path: &'static str,
    pub review_path: &'static str,
    pub cache_dir: &'static str,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            business_path: "data/yelp_academic_dataset_business.json",
            review_path: "data/yelp_academic_dataset_review.json",
            cache_dir: "cache",
        }
    }
}

pub struct ChartSettings {
    pub output_dir: &'static str,
    pub width: u32,
    /// Vertical pixels per bar; total chart height scales with row count
    pub row_height: u32,
    /// Size of the top/bottom ranking slices
    pub slice_size: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            output_dir: "charts",
            width: 1280,
            row_height: 18,
            slice_size: 50,
        }
    }
}

pub struct AppConfig {
    pub analysis: AnalysisSettings,
    pub fetch: FetchSettings,
    pub data: DataSettings,
    pub charts: ChartSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            analysis: AnalysisSettings::default(),
            fetch: FetchSettings::default(),
            data: DataSettings::default(),
            charts: ChartSettings::default(),
        }
    }
}
