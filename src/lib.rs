pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::{catalog::curriculum, etl::EtlEngine, pipeline::RankingsPipeline};
pub use crate::domain::model::{Curriculum, Lesson, LearningUnit, Module, UnitKind};
pub use crate::utils::error::{CatalogError, Result};
