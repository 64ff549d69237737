use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Facts extracted from version-control history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitFacts {
    pub commit_count: u64,
    pub first_commit_date: Option<NaiveDate>,
    pub last_commit_date: Option<NaiveDate>,
    pub contributors: BTreeSet<String>,
    pub branches: Vec<String>,
}

/// Facts extracted from the working tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodebaseFacts {
    pub has_ci_cd: bool,
    pub has_tests: bool,
    pub test_coverage: f64,
    pub languages: BTreeSet<String>,
    pub file_count: u64,
    pub readme_exists: bool,
    pub license_exists: bool,
    pub is_portfolio: bool,
}

/// Merged input to scoring. Built once per evaluation and never mutated
/// after [`FactRecord::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FactRecord {
    pub commit_count: u64,
    pub first_commit_date: Option<NaiveDate>,
    pub last_commit_date: Option<NaiveDate>,
    pub contributors: BTreeSet<String>,
    pub branches: Vec<String>,
    pub has_ci_cd: bool,
    pub has_tests: bool,
    pub test_coverage: f64,
    pub languages: BTreeSet<String>,
    pub file_count: u64,
    pub readme_exists: bool,
    pub license_exists: bool,
    pub is_portfolio: bool,
}

impl FactRecord {
    pub fn merge(git: GitFacts, codebase: CodebaseFacts) -> Self {
        Self {
            commit_count: git.commit_count,
            first_commit_date: git.first_commit_date,
            last_commit_date: git.last_commit_date,
            contributors: git.contributors,
            branches: git.branches,
            has_ci_cd: codebase.has_ci_cd,
            has_tests: codebase.has_tests,
            test_coverage: codebase.test_coverage.clamp(0.0, 100.0),
            languages: codebase.languages,
            file_count: codebase.file_count,
            readme_exists: codebase.readme_exists,
            license_exists: codebase.license_exists,
            is_portfolio: codebase.is_portfolio,
        }
    }

    /// Field name / rendered value pairs in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("commit_count", self.commit_count.to_string()),
            ("first_commit_date", render_date(self.first_commit_date)),
            ("last_commit_date", render_date(self.last_commit_date)),
            ("contributors", render_list(self.contributors.iter())),
            ("branches", render_list(self.branches.iter())),
            ("has_ci_cd", self.has_ci_cd.to_string()),
            ("has_tests", self.has_tests.to_string()),
            ("test_coverage", format!("{:.1}", self.test_coverage)),
            ("languages", render_list(self.languages.iter())),
            ("file_count", self.file_count.to_string()),
            ("readme_exists", self.readme_exists.to_string()),
            ("license_exists", self.license_exists.to_string()),
            ("is_portfolio", self.is_portfolio.to_string()),
        ]
    }
}

fn render_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "None".to_string())
}

fn render_list<'a>(items: impl Iterator<Item = &'a String>) -> String {
    format!(
        "[{}]",
        items.map(String::as_str).collect::<Vec<_>>().join(", ")
    )
}
