use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};

/// 學習單元類型。目前資料中只出現 "lesson",保留開放式變體以容納未來的類型。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitKind {
    Lesson,
    Other(String),
}

impl UnitKind {
    pub fn as_str(&self) -> &str {
        match self {
            UnitKind::Lesson => "lesson",
            UnitKind::Other(s) => s,
        }
    }
}

impl From<String> for UnitKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "lesson" => UnitKind::Lesson,
            _ => UnitKind::Other(s),
        }
    }
}

impl From<UnitKind> for String {
    fn from(kind: UnitKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 最小可定位的內容項目,指向外部課程內容的相對路徑。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningUnit {
    pub r#type: UnitKind,
    pub url: String,
}

impl LearningUnit {
    pub fn lesson(url: impl Into<String>) -> Self {
        Self {
            r#type: UnitKind::Lesson,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub topic: String,
    pub learning_units: Vec<LearningUnit>,
}

impl Lesson {
    pub fn new(topic: impl Into<String>, learning_units: Vec<LearningUnit>) -> Self {
        Self {
            topic: topic.into(),
            learning_units,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub lessons: Vec<Lesson>,
}

impl Module {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }
}

/// 完整課綱。模組、課程與學習單元的順序即為教學順序,建構後不再變動。
///
/// 對外的 JSON 形狀是模組陣列,與消費端約定的介面一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    pub modules: Vec<Module>,
}

impl Curriculum {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    pub fn unit_count(&self) -> usize {
        self.modules
            .iter()
            .flat_map(|m| &m.lessons)
            .map(|l| l.learning_units.len())
            .sum()
    }

    /// 依 topic 查詢課程,只回傳第一個符合者。
    pub fn find_lesson(&self, topic: &str) -> Option<&Lesson> {
        self.modules
            .iter()
            .flat_map(|m| &m.lessons)
            .find(|l| l.topic == topic)
    }
}

impl Validate for Curriculum {
    fn validate(&self) -> Result<()> {
        for (m_idx, module) in self.modules.iter().enumerate() {
            if module.lessons.is_empty() {
                return Err(CatalogError::IntegrityError {
                    location: format!("modules[{}]", m_idx),
                    message: "Module has no lessons".to_string(),
                });
            }

            let mut seen_topics = HashSet::new();
            for (l_idx, lesson) in module.lessons.iter().enumerate() {
                let location = format!("modules[{}].lessons[{}]", m_idx, l_idx);

                validate_non_empty_string(&format!("{}.topic", location), &lesson.topic)?;

                if !seen_topics.insert(lesson.topic.as_str()) {
                    return Err(CatalogError::IntegrityError {
                        location,
                        message: format!("Duplicate lesson topic: {}", lesson.topic),
                    });
                }

                if lesson.learning_units.is_empty() {
                    return Err(CatalogError::IntegrityError {
                        location,
                        message: "Lesson has no learning units".to_string(),
                    });
                }

                for (u_idx, unit) in lesson.learning_units.iter().enumerate() {
                    validate_non_empty_string(
                        &format!("{}.learning_units[{}].url", location, u_idx),
                        &unit.url,
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// 單一爬取到的排名項目。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRecord {
    pub category: String,
    pub position: usize,
    pub rating: f32,
    pub reviews: u32,
    pub cost_level: u8,
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct RankingsReport {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub records: Vec<RankingRecord>,
    pub csv_output: String,
    pub json_output: String,
    pub shortlist: Vec<RankingRecord>,
}
