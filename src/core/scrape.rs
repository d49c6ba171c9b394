use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::domain::model::RankingRecord;

static RATING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d\.\d+").unwrap());
static COUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9,]+").unwrap());

/// 解析單一排名頁面。
///
/// 缺少評分的項目直接略過,名次依保留下來的項目重新編號,
/// 每個分類最多取 `max_items` 筆。
pub fn parse_ranking_page(html: &str, category: &str, max_items: usize) -> Vec<RankingRecord> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse(".ranking-item").unwrap();
    let rating_selector = Selector::parse(".ranking-item__rating--value").unwrap();
    let reviews_selector = Selector::parse(".ranking-item__rating--count").unwrap();
    let price_selector = Selector::parse(".ranking-item__price").unwrap();
    let desc_selector = Selector::parse(".ranking-item__desc").unwrap();

    let mut records = Vec::new();
    for item in document.select(&item_selector) {
        if records.len() >= max_items {
            break;
        }

        let rating = match item
            .select(&rating_selector)
            .next()
            .and_then(|el| extract_rating(&element_text(&el)))
        {
            Some(value) => value,
            None => {
                tracing::debug!("🔍 Skipping a {} item without a rating value", category);
                continue;
            }
        };

        let reviews = item
            .select(&reviews_selector)
            .next()
            .and_then(|el| extract_review_count(&element_text(&el)))
            .unwrap_or(0);

        // 價格欄以 "filled" 圖示數量表示等級
        let cost_level = item
            .select(&price_selector)
            .next()
            .map(|el| {
                let filled = el.inner_html().matches("filled").count();
                u8::try_from(filled).unwrap_or(u8::MAX)
            })
            .unwrap_or(0);

        let summary = item
            .select(&desc_selector)
            .next()
            .map(|el| element_text(&el))
            .unwrap_or_default();

        records.push(RankingRecord {
            category: category.to_string(),
            position: records.len() + 1,
            rating,
            reviews,
            cost_level,
            summary,
        });
    }

    records
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join("")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_rating(text: &str) -> Option<f32> {
    RATING_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

fn extract_review_count(text: &str) -> Option<u32> {
    COUNT_RE
        .find(text)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}
