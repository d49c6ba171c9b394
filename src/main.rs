use clap::Parser;
use curriculum_catalog::config::catalog_config::CatalogConfig;
use curriculum_catalog::core::export;
use curriculum_catalog::curriculum;
use curriculum_catalog::utils::monitor::SystemMonitor;
use curriculum_catalog::utils::{logger, validation::Validate};
use curriculum_catalog::{CliConfig, Curriculum, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting curriculum-catalog CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入課綱:指定檔案或內建資料
    let (name, catalog) = match load_catalog(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("❌ Failed to load catalog: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    display_catalog_summary(&name, &catalog);

    if config.summary_only {
        tracing::info!("Summary only mode, no files written");
        return Ok(());
    }

    let monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 匯出課綱
    let storage = LocalStorage::new(config.output_path.clone());

    match export::write_catalog(&storage, &catalog, &config.formats).await {
        Ok(written) => {
            monitor.log_final_stats();
            tracing::info!("✅ Catalog export completed successfully!");
            tracing::info!(
                "📁 Files written to {}: {}",
                config.output_path,
                written.join(", ")
            );
            println!("✅ Catalog export completed successfully!");
            println!(
                "📁 Files written to {}: {}",
                config.output_path,
                written.join(", ")
            );
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Catalog export failed: {} (Category: {:?}, Severity: {:?})",
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

fn load_catalog(config: &CliConfig) -> curriculum_catalog::Result<(String, Curriculum)> {
    match &config.catalog {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            let catalog_config = CatalogConfig::from_file(path)?;
            let name = catalog_config.name().to_string();
            Ok((name, catalog_config.into_curriculum()?))
        }
        None => Ok(("prework".to_string(), curriculum().clone())),
    }
}

fn display_catalog_summary(name: &str, catalog: &Curriculum) {
    println!("📋 Catalog Summary: {}", name);
    println!(
        "  Modules: {}, Lessons: {}, Units: {}",
        catalog.module_count(),
        catalog.lesson_count(),
        catalog.unit_count()
    );

    for (m_idx, module) in catalog.modules.iter().enumerate() {
        println!("  Module {}:", m_idx);
        for (l_idx, lesson) in module.lessons.iter().enumerate() {
            println!(
                "    {}. {} ({} units)",
                l_idx + 1,
                lesson.topic,
                lesson.learning_units.len()
            );
        }
    }

    println!();
}
