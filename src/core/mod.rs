pub mod catalog;
pub mod etl;
pub mod export;
pub mod pipeline;
pub mod scrape;

pub use crate::domain::model::{RankingRecord, RankingsReport};
pub use crate::domain::ports::{Pipeline, RankingsConfig, Storage};
pub use crate::utils::error::Result;
