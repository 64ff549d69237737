pub mod rating;
pub mod scoring;

use crate::scan;
use crate::types::config::GitSettings;
use crate::types::report::{Evaluation, Rating};
use chrono::NaiveDate;
use std::path::Path;

/// Evaluates the repository at `root`. Never fails: a missing path yields
/// the INVALID sentinel and every collection problem degrades to defaults.
pub fn evaluate(root: &Path, settings: &GitSettings, today: NaiveDate) -> Evaluation {
    if !root.exists() {
        tracing::debug!(root = %root.display(), "path missing, returning sentinel");
        return invalid();
    }

    tracing::info!(root = %root.display(), "evaluating repository");
    let record = scan::collect_facts(root, settings);
    let card = scoring::score(&record, today);
    let (rating, recommendation) = rating::classify(card.total);
    tracing::info!(score = card.total, %rating, "evaluation complete");

    Evaluation {
        score: card.total,
        rating,
        recommendation: recommendation.to_string(),
        details: Some(record),
        breakdown: Some(card),
    }
}

fn invalid() -> Evaluation {
    Evaluation {
        score: 0,
        rating: Rating::Invalid,
        recommendation: rating::recommendation(Rating::Invalid).to_string(),
        details: None,
        breakdown: None,
    }
}
