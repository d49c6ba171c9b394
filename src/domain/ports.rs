use crate::domain::model::{RankingRecord, RankingsReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait RankingsConfig: Send + Sync {
    fn base_url(&self) -> &str;
    fn categories(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn max_items(&self) -> usize;
    fn min_rating(&self) -> f32;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RankingRecord>>;
    async fn transform(&self, data: Vec<RankingRecord>) -> Result<RankingsReport>;
    async fn load(&self, report: RankingsReport) -> Result<String>;
}
