use crate::types::facts::FactRecord;
use crate::types::scoring::{Score, ScoreCard};
use chrono::NaiveDate;

pub const RECENT_COMMIT_DAYS: i64 = 30;

/// Scores `record` against the fixed rubric. `today` is the reference date
/// for the recent-commit check.
pub fn score(record: &FactRecord, today: NaiveDate) -> ScoreCard {
    ScoreCard {
        activity: activity_score(record.commit_count),
        tests: tests_score(record.has_tests, record.test_coverage),
        ci_cd: if record.has_ci_cd { 15 } else { 0 },
        docs: docs_score(record),
        structure: structure_score(record),
        maintenance: maintenance_score(record, today),
        portfolio: if record.is_portfolio { 5 } else { 0 },
        total: 0,
    }
    .finalize()
}

pub fn activity_score(commit_count: u64) -> Score {
    match commit_count {
        50.. => 20,
        20..=49 => 15,
        10..=19 => 10,
        5..=9 => 5,
        _ => 0,
    }
}

// Nothing populates coverage yet, so the sub-bonus is effectively unused.
fn tests_score(has_tests: bool, coverage: f64) -> Score {
    if !has_tests {
        return 0;
    }
    let bonus = if coverage > 80.0 {
        10
    } else if coverage > 50.0 {
        5
    } else {
        0
    };
    15 + bonus
}

fn docs_score(record: &FactRecord) -> Score {
    let mut score = 0;
    if record.readme_exists {
        score += 7;
    }
    if record.license_exists {
        score += 3;
    }
    score
}

fn structure_score(record: &FactRecord) -> Score {
    let mut score = 0;
    if record.file_count > 20 {
        score += 5;
    }
    if !record.languages.is_empty() {
        score += 5;
    }
    if record.contributors.len() > 1 {
        score += 5;
    }
    score
}

fn maintenance_score(record: &FactRecord, today: NaiveDate) -> Score {
    let mut score = 0;
    if record.branches.len() > 1 {
        score += 5;
    }
    if let Some(last) = record.last_commit_date {
        if (today - last).num_days() <= RECENT_COMMIT_DAYS {
            score += 5;
        }
    }
    score
}
