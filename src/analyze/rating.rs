use crate::types::report::Rating;
use crate::types::scoring::Score;

pub const GREAT_THRESHOLD: Score = 70;
pub const GOOD_THRESHOLD: Score = 50;
pub const FAIR_THRESHOLD: Score = 30;

pub const INVALID_RECOMMENDATION: &str = "Repository path does not exist";

pub fn classify(score: Score) -> (Rating, &'static str) {
    let rating = match score {
        s if s >= GREAT_THRESHOLD => Rating::Great,
        s if s >= GOOD_THRESHOLD => Rating::Good,
        s if s >= FAIR_THRESHOLD => Rating::Fair,
        _ => Rating::Poor,
    };
    (rating, recommendation(rating))
}

pub fn recommendation(rating: Rating) -> &'static str {
    match rating {
        Rating::Great => "Excellent repository! Well-maintained with good practices.",
        Rating::Good => {
            "Good repository with solid foundations. Consider adding more tests or CI/CD."
        }
        Rating::Fair => {
            "Fair repository. Needs improvement in testing, documentation, or commit activity."
        }
        Rating::Poor => "Poor repository. Significant improvements needed in multiple areas.",
        Rating::Invalid => INVALID_RECOMMENDATION,
    }
}
