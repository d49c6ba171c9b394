use crate::domain::model::{Curriculum, Module};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: Option<CatalogInfo>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

impl CatalogConfig {
    /// 從 TOML 或 JSON 檔案載入課綱,依副檔名決定解析方式
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;

        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(CatalogError::InvalidConfigValueError {
                field: "catalog_file".to_string(),
                value: path.as_ref().display().to_string(),
                reason: "Supported catalog formats are .toml and .json".to_string(),
            }),
        }
    }

    /// 從 TOML 字串解析課綱
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 從 JSON 字串解析課綱,接受裸的模組陣列
    pub fn from_json_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let modules: Vec<Module> = serde_json::from_str(&processed_content)
            .map_err(|e| CatalogError::ConfigValidationError {
                field: "json_parsing".to_string(),
                message: format!("JSON parsing error: {}", e),
            })?;

        Ok(Self {
            catalog: None,
            modules,
        })
    }

    /// 替換環境變數 (例如 ${LESSON_BASE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證課綱內容的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(info) = &self.catalog {
            validate_non_empty_string("catalog.name", &info.name)?;
        }

        if self.modules.is_empty() {
            return Err(CatalogError::MissingConfigError {
                field: "modules".to_string(),
            });
        }

        Curriculum::new(self.modules.clone()).validate()
    }

    /// 取得課綱名稱
    pub fn name(&self) -> &str {
        self.catalog
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("curriculum")
    }

    /// 驗證後轉成唯讀課綱
    pub fn into_curriculum(self) -> Result<Curriculum> {
        self.validate()?;
        Ok(Curriculum::new(self.modules))
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
