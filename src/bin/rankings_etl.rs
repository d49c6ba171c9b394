use clap::Parser;
use curriculum_catalog::core::RankingsConfig;
use curriculum_catalog::utils::error::CatalogError;
use curriculum_catalog::utils::logger;
use curriculum_catalog::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use curriculum_catalog::{EtlEngine, LocalStorage, RankingsPipeline};

#[derive(Debug, Parser)]
#[command(name = "rankings-etl")]
#[command(about = "Bootcamp rankings scraping pipeline")]
struct Args {
    /// Base URL of the rankings site
    #[arg(long, default_value = "https://www.switchup.org/rankings/")]
    base_url: String,

    /// Ranking categories to scrape, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "best-coding-bootcamps,best-online-bootcamps,best-data-science-bootcamps,best-web-design-bootcamps,best-cyber-security-bootcamps"
    )]
    categories: Vec<String>,

    #[arg(long, default_value = "./output")]
    output_path: String,

    /// Maximum ranking items taken per category
    #[arg(long, default_value_t = 20)]
    max_items: usize,

    /// Rating threshold for the shortlist
    #[arg(long, default_value_t = 4.8)]
    min_rating: f32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable system monitoring
    #[arg(long)]
    monitor: bool,

    /// Dry run - show what would be scraped without executing
    #[arg(long)]
    dry_run: bool,
}

impl Validate for Args {
    fn validate(&self) -> curriculum_catalog::Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_positive_number("max_items", self.max_items, 1)?;
        validate_range("min_rating", self.min_rating, 0.0, 5.0)?;

        if self.categories.is_empty() {
            return Err(CatalogError::MissingConfigError {
                field: "categories".to_string(),
            });
        }

        Ok(())
    }
}

impl RankingsConfig for Args {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn max_items(&self) -> usize {
        self.max_items
    }

    fn min_rating(&self) -> f32 {
        self.min_rating
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting bootcamp rankings ETL");

    // 驗證配置
    if let Err(e) = args.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual scraping will occur");
        perform_dry_run(&args);
        return Ok(());
    }

    if args.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和排名管道
    let storage = LocalStorage::new(args.output_path.clone());
    let monitor_enabled = args.monitor;
    let pipeline = RankingsPipeline::new(storage, args);

    // 創建 ETL 引擎並運行
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Rankings ETL completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Rankings ETL completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Rankings ETL failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                curriculum_catalog::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                curriculum_catalog::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                curriculum_catalog::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                curriculum_catalog::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Source: {}", args.base_url);
    println!("  Categories: {}", args.categories.join(", "));
    println!("  Output: {}", args.output_path);
    println!("  Max items per category: {}", args.max_items);
    println!("  Shortlist rating threshold: {}", args.min_rating);

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(args: &Args) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Pages to fetch:");
    for category in &args.categories {
        println!("  {}{}", args.base_url, category);
    }

    println!();
    println!("⚙️ Processing:");
    println!(
        "  📊 Up to {} items per category ({} max total)",
        args.max_items,
        args.max_items * args.categories.len()
    );
    println!(
        "  ⭐ Items rated {} or higher go to the shortlist",
        args.min_rating
    );

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}/rankings.zip", args.output_path);
    println!("  Bundle: rankings.csv, rankings.json, shortlist.json");

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
