pub mod catalog_config;
pub mod cli;

#[cfg(feature = "cli")]
use crate::utils::error::{CatalogError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "curriculum-catalog")]
#[command(about = "A typed curriculum catalog with export support")]
pub struct CliConfig {
    /// Catalog file to load instead of the built-in curriculum (.toml or .json)
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Export formats, comma separated (json, csv)
    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<String>,

    /// Print the catalog summary without writing any files
    #[arg(long)]
    pub summary_only: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;

        if self.formats.is_empty() {
            return Err(CatalogError::MissingConfigError {
                field: "formats".to_string(),
            });
        }

        let valid_formats = ["json", "csv"];
        for format in &self.formats {
            if !valid_formats.contains(&format.as_str()) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "formats".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        if let Some(catalog) = &self.catalog {
            validate_file_extension("catalog", catalog, &["toml", "json"])?;
        }

        Ok(())
    }
}
