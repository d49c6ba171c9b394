use crate::core::Storage;
use crate::domain::model::Curriculum;
use crate::utils::error::{CatalogError, Result};

/// 課綱的 JSON 匯出,形狀是模組陣列,與消費端約定的介面一致。
pub fn catalog_json(curriculum: &Curriculum) -> Result<String> {
    Ok(serde_json::to_string_pretty(curriculum)?)
}

/// 課綱的 CSV 匯出,一列一個學習單元。
pub fn catalog_csv(curriculum: &Curriculum) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["module", "topic", "type", "url"])?;

    for (m_idx, module) in curriculum.modules.iter().enumerate() {
        let module_idx = m_idx.to_string();
        for lesson in &module.lessons {
            for unit in &lesson.learning_units {
                writer.write_record([
                    module_idx.as_str(),
                    lesson.topic.as_str(),
                    unit.r#type.as_str(),
                    unit.url.as_str(),
                ])?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| CatalogError::ProcessingError {
        message: format!("CSV output was not valid UTF-8: {}", e),
    })
}

/// 依指定格式將課綱寫入儲存層,回傳實際寫出的檔名。
pub async fn write_catalog<S: Storage>(
    storage: &S,
    curriculum: &Curriculum,
    formats: &[String],
) -> Result<Vec<String>> {
    let mut written = Vec::new();

    for format in formats {
        match format.as_str() {
            "json" => {
                storage
                    .write_file("catalog.json", catalog_json(curriculum)?.as_bytes())
                    .await?;
                written.push("catalog.json".to_string());
            }
            "csv" => {
                storage
                    .write_file("catalog.csv", catalog_csv(curriculum)?.as_bytes())
                    .await?;
                written.push("catalog.csv".to_string());
            }
            other => {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "formats".to_string(),
                    value: other.to_string(),
                    reason: "Supported formats are json and csv".to_string(),
                });
            }
        }
    }

    Ok(written)
}
