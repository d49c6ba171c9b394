use crate::core::scrape;
use crate::core::{Pipeline, RankingRecord, RankingsConfig, RankingsReport, Storage};
use crate::utils::error::{CatalogError, Result};
use chrono::Utc;
use reqwest::Client;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct RankingsPipeline<S: Storage, C: RankingsConfig> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: RankingsConfig> RankingsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: RankingsConfig> Pipeline for RankingsPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RankingRecord>> {
        let mut records = Vec::new();

        for category in self.config.categories() {
            let url = format!("{}{}", self.config.base_url(), category);
            tracing::debug!("Fetching ranking page: {}", url);
            let response = self.client.get(&url).send().await?;

            tracing::debug!("Page response status: {}", response.status());

            if !response.status().is_success() {
                tracing::warn!("⚠️ Skipping {}: HTTP {}", category, response.status());
                continue;
            }

            let html = response.text().await?;
            let page_records =
                scrape::parse_ranking_page(&html, category, self.config.max_items());
            tracing::debug!("📥 Parsed {} records from {}", page_records.len(), category);
            records.extend(page_records);
        }

        if records.is_empty() {
            return Err(CatalogError::ScrapeError {
                page: self.config.base_url().to_string(),
                details: "no ranking items found in any category".to_string(),
            });
        }

        Ok(records)
    }

    async fn transform(&self, data: Vec<RankingRecord>) -> Result<RankingsReport> {
        let generated_at = Utc::now();

        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in &data {
            writer.serialize(record)?;
        }
        let csv_bytes = writer
            .into_inner()
            .map_err(|e| CatalogError::ProcessingError {
                message: format!("CSV buffer error: {}", e),
            })?;
        let csv_output =
            String::from_utf8(csv_bytes).map_err(|e| CatalogError::ProcessingError {
                message: format!("CSV output was not valid UTF-8: {}", e),
            })?;

        let json_output = serde_json::to_string_pretty(&serde_json::json!({
            "generated_at": generated_at.to_rfc3339(),
            "count": data.len(),
            "records": &data,
        }))?;

        // 評分達門檻者另外列入精選名單
        let shortlist: Vec<RankingRecord> = data
            .iter()
            .filter(|r| r.rating >= self.config.min_rating())
            .cloned()
            .collect();

        tracing::debug!(
            "🔄 Transform complete: {} records, {} shortlisted",
            data.len(),
            shortlist.len()
        );

        Ok(RankingsReport {
            generated_at,
            records: data,
            csv_output,
            json_output,
            shortlist,
        })
    }

    async fn load(&self, report: RankingsReport) -> Result<String> {
        let output_path = format!("{}/rankings.zip", self.config.output_path());

        tracing::debug!(
            "Creating ZIP file with {} files",
            2 + if report.shortlist.is_empty() { 0 } else { 1 }
        );

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            zip.start_file::<_, ()>("rankings.csv", FileOptions::default())?;
            zip.write_all(report.csv_output.as_bytes())?;

            zip.start_file::<_, ()>("rankings.json", FileOptions::default())?;
            zip.write_all(report.json_output.as_bytes())?;

            if !report.shortlist.is_empty() {
                zip.start_file::<_, ()>("shortlist.json", FileOptions::default())?;
                let shortlist_json = serde_json::to_string_pretty(&report.shortlist)?;
                zip.write_all(shortlist_json.as_bytes())?;
            }

            // 完成並取回底層 Vec<u8>
            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("💾 Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file("rankings.zip", &zip_data).await?;

        tracing::debug!("ZIP file saved successfully");
        Ok(output_path)
    }
}
