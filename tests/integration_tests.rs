use curriculum_catalog::core::RankingsConfig;
use curriculum_catalog::{CatalogError, EtlEngine, LocalStorage, RankingsPipeline};
use httpmock::prelude::*;
use tempfile::TempDir;

struct TestRankingsConfig {
    base_url: String,
    categories: Vec<String>,
    output_path: String,
    max_items: usize,
    min_rating: f32,
}

impl RankingsConfig for TestRankingsConfig {
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

fn ranking_page(items: &[(&str, &str, usize)]) -> String {
    let body: String = items
        .iter()
        .map(|(rating, reviews, cost)| {
            let price_icons = "<i class=\"icon filled\"></i>".repeat(*cost);
            format!(
                concat!(
                    "<div class=\"ranking-item\">",
                    "<span class=\"ranking-item__rating--value\">{}</span>",
                    "<span class=\"ranking-item__rating--count\">({} reviews)</span>",
                    "<div class=\"ranking-item__price\">{}</div>",
                    "<div class=\"ranking-item__desc\">An immersive program.</div>",
                    "</div>"
                ),
                rating, reviews, price_icons
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", body)
}

#[tokio::test]
async fn test_end_to_end_rankings_etl_with_real_http() {
    // Setup temporary directory for output
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    // Setup mock rankings site with two categories
    let server = MockServer::start();

    let coding_mock = server.mock(|when, then| {
        when.method(GET).path("/best-coding-bootcamps");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(ranking_page(&[
                ("4.87", "1,234", 3),
                ("4.52", "98", 1),
            ]));
    });
    let online_mock = server.mock(|when, then| {
        when.method(GET).path("/best-online-bootcamps");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(ranking_page(&[("4.91", "410", 2)]));
    });

    let config = TestRankingsConfig {
        base_url: server.url("/"),
        categories: vec![
            "best-coding-bootcamps".to_string(),
            "best-online-bootcamps".to_string(),
        ],
        output_path: output_path.clone(),
        max_items: 20,
        min_rating: 4.8,
    };

    // Create storage and pipeline
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankingsPipeline::new(storage, config);

    // Create and run ETL engine
    let engine = EtlEngine::new_with_monitoring(pipeline, false);
    let result = engine.run().await;

    // Verify results
    assert!(result.is_ok());
    coding_mock.assert();
    online_mock.assert();

    let output_file_path = result.unwrap();
    assert!(output_file_path.ends_with("rankings.zip"));

    // Verify output file exists
    let full_path = std::path::Path::new(&output_path).join("rankings.zip");
    assert!(full_path.exists());

    // Verify ZIP content
    let zip_data = std::fs::read(&full_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();

    let file_names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();

    assert!(file_names.contains(&"rankings.csv".to_string()));
    assert!(file_names.contains(&"rankings.json".to_string()));
    assert!(file_names.contains(&"shortlist.json".to_string()));

    // Verify CSV content structure
    let csv_content = {
        let mut csv_file = archive.by_name("rankings.csv").unwrap();
        let mut content = String::new();
        std::io::Read::read_to_string(&mut csv_file, &mut content).unwrap();
        content
    };

    assert!(csv_content.contains("category,position,rating,reviews,cost_level,summary"));
    assert!(csv_content.contains("best-coding-bootcamps,1,4.87,1234,3"));
    assert!(csv_content.contains("best-coding-bootcamps,2,4.52,98,1"));
    // Positions restart at 1 per category
    assert!(csv_content.contains("best-online-bootcamps,1,4.91,410,2"));

    // Only the 4.87 and 4.91 records clear the 4.8 threshold
    let shortlist_content = {
        let mut file = archive.by_name("shortlist.json").unwrap();
        let mut content = String::new();
        std::io::Read::read_to_string(&mut file, &mut content).unwrap();
        content
    };
    let shortlist: serde_json::Value = serde_json::from_str(&shortlist_content).unwrap();
    assert_eq!(shortlist.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_end_to_end_with_one_failing_category() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();

    // One category is down, the other still produces output
    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/best-online-bootcamps");
        then.status(500);
    });
    let working_mock = server.mock(|when, then| {
        when.method(GET).path("/best-coding-bootcamps");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(ranking_page(&[("4.60", "55", 2)]));
    });

    let config = TestRankingsConfig {
        base_url: server.url("/"),
        categories: vec![
            "best-online-bootcamps".to_string(),
            "best-coding-bootcamps".to_string(),
        ],
        output_path: output_path.clone(),
        max_items: 20,
        min_rating: 4.8,
    };

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankingsPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    let result = engine.run().await;

    assert!(result.is_ok());
    failing_mock.assert();
    working_mock.assert();

    let full_path = std::path::Path::new(&output_path).join("rankings.zip");
    assert!(full_path.exists());

    // No record clears the threshold, so no shortlist file
    let zip_data = std::fs::read(&full_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let archive = zip::ZipArchive::new(cursor).unwrap();
    assert_eq!(archive.len(), 2);
}

#[tokio::test]
async fn test_end_to_end_fails_when_every_category_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let empty_mock = server.mock(|when, then| {
        when.method(GET).path("/best-coding-bootcamps");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html><body><p>Rankings are being updated.</p></body></html>");
    });

    let config = TestRankingsConfig {
        base_url: server.url("/"),
        categories: vec!["best-coding-bootcamps".to_string()],
        output_path: output_path.clone(),
        max_items: 20,
        min_rating: 4.8,
    };

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankingsPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();

    empty_mock.assert();
    assert!(matches!(err, CatalogError::ScrapeError { .. }));

    // Nothing should have been written
    let full_path = std::path::Path::new(&output_path).join("rankings.zip");
    assert!(!full_path.exists());
}

#[tokio::test]
async fn test_max_items_caps_each_category() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/best-coding-bootcamps");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(ranking_page(&[
                ("4.90", "100", 1),
                ("4.80", "200", 2),
                ("4.70", "300", 3),
            ]));
    });

    let config = TestRankingsConfig {
        base_url: server.url("/"),
        categories: vec!["best-coding-bootcamps".to_string()],
        output_path: output_path.clone(),
        max_items: 2,
        min_rating: 4.8,
    };

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankingsPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    engine.run().await.unwrap();
    page_mock.assert();

    let full_path = std::path::Path::new(&output_path).join("rankings.zip");
    let zip_data = std::fs::read(&full_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();

    let json_content = {
        let mut file = archive.by_name("rankings.json").unwrap();
        let mut content = String::new();
        std::io::Read::read_to_string(&mut file, &mut content).unwrap();
        content
    };
    let report: serde_json::Value = serde_json::from_str(&json_content).unwrap();
    assert_eq!(report["count"], 2);
    assert!(report["generated_at"].is_string());
}
