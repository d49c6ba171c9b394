use std::sync::LazyLock;

use crate::config::catalog_config::CatalogConfig;
use crate::domain::model::{Curriculum, Lesson, LearningUnit, Module};
use crate::utils::error::Result;

static BUILTIN: LazyLock<Curriculum> = LazyLock::new(prework_curriculum);

/// 取得內建課綱。
///
/// 課綱在第一次存取時建構,之後的呼叫都回傳同一份唯讀資料,
/// 可以在任意多個執行緒間共享。
pub fn curriculum() -> &'static Curriculum {
    &BUILTIN
}

/// 從 TOML 或 JSON 檔案載入課綱,載入時會做完整性檢查。
pub fn load_from_file(path: &str) -> Result<Curriculum> {
    CatalogConfig::from_file(path)?.into_curriculum()
}

/// Prework 課綱:開發環境、Python、MySQL 與統計入門。
pub fn prework_curriculum() -> Curriculum {
    Curriculum::new(vec![Module::new(vec![
        Lesson::new(
            "prepareDevEnv",
            vec![
                LearningUnit::lesson(
                    "/lessons/module-0-prework/00-prepare-dev-env/command-line-basics.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/00-prepare-dev-env/challenges/homebrew.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/00-prepare-dev-env/challenges/git.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/00-prepare-dev-env/challenges/python.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/00-prepare-dev-env/challenges/mysql.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/00-prepare-dev-env/challenges/jupyter.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/00-prepare-dev-env/introduction-to-git.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/00-prepare-dev-env/github-project.md",
                ),
            ],
        ),
        Lesson::new(
            "pythonBeginner",
            vec![
                LearningUnit::lesson(
                    "/lessons/module-0-prework/01-python-beginner/python-basics.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/01-python-beginner/data-structures.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/01-python-beginner/control-flow.md",
                ),
                LearningUnit::lesson("/lessons/module-0-prework/01-python-beginner/files.md"),
            ],
        ),
        Lesson::new(
            "mySQLbeginner",
            vec![
                LearningUnit::lesson("/lessons/module-0-prework/02-mysql-beginner/mysql-basics.md"),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/02-mysql-beginner/summary-stats.md",
                ),
            ],
        ),
        Lesson::new(
            "probabilityStatistics",
            vec![
                LearningUnit::lesson(
                    "/lessons/module-0-prework/03-probability-statistics/descriptive-stats.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/03-probability-statistics/distributions-sampling.md",
                ),
                LearningUnit::lesson(
                    "/lessons/module-0-prework/03-probability-statistics/correlation-regression.md",
                ),
            ],
        ),
    ])])
}
