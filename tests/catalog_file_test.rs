use anyhow::Result;
use curriculum_catalog::config::catalog_config::CatalogConfig;
use curriculum_catalog::core::catalog::load_from_file;
use curriculum_catalog::core::export;
use curriculum_catalog::curriculum;
use curriculum_catalog::{CatalogError, Curriculum, LocalStorage};
use tempfile::TempDir;

/// 測試 TOML 課綱檔案的完整載入流程
#[test]
fn test_load_toml_catalog_from_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("prework.toml");

    let toml_content = r#"
[catalog]
name = "prework"
description = "Bootcamp prework catalog"
version = "1.0.0"

[[modules]]

[[modules.lessons]]
topic = "prepareDevEnv"

[[modules.lessons.learning_units]]
type = "lesson"
url = "/lessons/module-0-prework/00-prepare-dev-env/command-line-basics.md"

[[modules.lessons]]
topic = "pythonBeginner"

[[modules.lessons.learning_units]]
type = "lesson"
url = "/lessons/module-0-prework/01-python-beginner/python-basics.md"
"#;
    std::fs::write(&catalog_path, toml_content)?;

    let catalog = load_from_file(catalog_path.to_str().unwrap())?;

    assert_eq!(catalog.module_count(), 1);
    assert_eq!(catalog.lesson_count(), 2);
    assert_eq!(
        catalog.find_lesson("pythonBeginner").map(|l| l.topic.as_str()),
        Some("pythonBeginner")
    );

    Ok(())
}

/// 匯出的 JSON 檔案可以原樣當作課綱檔案載入
#[test]
fn test_exported_json_loads_back_as_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("exported.json");

    let json = export::catalog_json(curriculum())?;
    std::fs::write(&catalog_path, json)?;

    let reloaded = load_from_file(catalog_path.to_str().unwrap())?;
    assert_eq!(&reloaded, curriculum());

    Ok(())
}

#[test]
fn test_malformed_catalog_file_is_a_load_time_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("broken.json");

    // 缺少 url 欄位
    let json_content = r#"
[
  {
    "lessons": [
      {
        "topic": "prepareDevEnv",
        "learning_units": [
          {"type": "lesson"}
        ]
      }
    ]
  }
]
"#;
    std::fs::write(&catalog_path, json_content)?;

    let err = load_from_file(catalog_path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, CatalogError::ConfigValidationError { .. }));

    Ok(())
}

#[test]
fn test_duplicate_topics_rejected_at_load_time() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("dupes.json");

    let json_content = r#"
[
  {
    "lessons": [
      {
        "topic": "prepareDevEnv",
        "learning_units": [{"type": "lesson", "url": "/lessons/a.md"}]
      },
      {
        "topic": "prepareDevEnv",
        "learning_units": [{"type": "lesson", "url": "/lessons/b.md"}]
      }
    ]
  }
]
"#;
    std::fs::write(&catalog_path, json_content)?;

    let err = load_from_file(catalog_path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, CatalogError::IntegrityError { .. }));

    Ok(())
}

#[test]
fn test_missing_catalog_file_surfaces_io_error() {
    let err = load_from_file("/nonexistent/prework.toml").unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
}

/// 端到端:載入 TOML 檔案,匯出 JSON 與 CSV 到本地儲存
#[tokio::test]
async fn test_load_then_export_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("prework.toml");

    let toml_content = r#"
[catalog]
name = "prework"

[[modules]]

[[modules.lessons]]
topic = "mySQLbeginner"

[[modules.lessons.learning_units]]
type = "lesson"
url = "/lessons/module-0-prework/02-mysql-beginner/mysql-basics.md"

[[modules.lessons.learning_units]]
type = "lesson"
url = "/lessons/module-0-prework/02-mysql-beginner/summary-stats.md"
"#;
    std::fs::write(&catalog_path, toml_content)?;

    let config = CatalogConfig::from_file(&catalog_path)?;
    assert_eq!(config.name(), "prework");
    let catalog = config.into_curriculum()?;

    let output_dir = temp_dir.path().join("output");
    let storage = LocalStorage::new(&output_dir);
    let formats = vec!["json".to_string(), "csv".to_string()];

    let written = export::write_catalog(&storage, &catalog, &formats).await?;
    assert_eq!(written, vec!["catalog.json", "catalog.csv"]);

    let json = std::fs::read_to_string(output_dir.join("catalog.json"))?;
    let reloaded: Curriculum = serde_json::from_str(&json)?;
    assert_eq!(reloaded, catalog);

    let csv = std::fs::read_to_string(output_dir.join("catalog.csv"))?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3); // Header + 2 units
    assert_eq!(lines[0], "module,topic,type,url");
    assert!(lines[1].starts_with("0,mySQLbeginner,lesson,"));

    Ok(())
}
