use serde::Serialize;

pub type Score = u32;

pub const MAX_SCORE: Score = 100;

/// Contribution of each rubric bucket plus the clamped total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub activity: Score,
    pub tests: Score,
    pub ci_cd: Score,
    pub docs: Score,
    pub structure: Score,
    pub maintenance: Score,
    pub portfolio: Score,
    pub total: Score,
}

impl ScoreCard {
    pub fn finalize(mut self) -> Self {
        let sum = self.activity
            + self.tests
            + self.ci_cd
            + self.docs
            + self.structure
            + self.maintenance
            + self.portfolio;
        self.total = sum.min(MAX_SCORE);
        self
    }

    pub fn buckets(&self) -> [(&'static str, Score); 7] {
        [
            ("activity", self.activity),
            ("tests", self.tests),
            ("ci_cd", self.ci_cd),
            ("docs", self.docs),
            ("structure", self.structure),
            ("maintenance", self.maintenance),
            ("portfolio", self.portfolio),
        ]
    }
}
