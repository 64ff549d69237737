use super::facts::FactRecord;
use super::scoring::{Score, ScoreCard};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Invalid,
    Poor,
    Fair,
    Good,
    Great,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Poor => "POOR",
            Self::Fair => "FAIR",
            Self::Good => "GOOD",
            Self::Great => "GREAT",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub score: Score,
    pub rating: Rating,
    pub recommendation: String,
    #[serde(serialize_with = "serialize_details")]
    pub details: Option<FactRecord>,
    #[serde(skip)]
    pub breakdown: Option<ScoreCard>,
}

impl Evaluation {
    pub fn is_invalid(&self) -> bool {
        matches!(self.rating, Rating::Invalid)
    }
}

// The sentinel renders as an empty object rather than null.
fn serialize_details<S: Serializer>(
    details: &Option<FactRecord>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match details {
        Some(record) => record.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}
