use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "nps_classification", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NpsClassification {
    Promoter,
    Passive,
    Detractor,
}

impl NpsClassification {
    /// Standard NPS banding: 9-10 promoter, 7-8 passive, 0-6 detractor.
    pub fn from_score(score: i32) -> Self {
        match score {
            9..=10 => NpsClassification::Promoter,
            7..=8 => NpsClassification::Passive,
            _ => NpsClassification::Detractor,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct NpsResponse {
    pub id: Uuid,
    pub dealership_id: Uuid,
    pub client_id: Uuid,
    pub score: i32,
    pub classification: NpsClassification,
    pub comment: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewNpsResponse {
    pub dealership_id: Uuid,
    pub client_id: Uuid,
    #[validate(range(min = 0, max = 10, message = "Score must be between 0 and 10"))]
    pub score: i32,
    pub comment: Option<String>,
}

/// Aggregate counts for a dealership, straight from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NpsSummary {
    pub promoters: i64,
    pub passives: i64,
    pub detractors: i64,
    pub total: i64,
}

impl NpsSummary {
    /// Net Promoter Score: % promoters minus % detractors, -100..=100.
    pub fn score(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.promoters - self.detractors) as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_bands() {
        assert_eq!(NpsClassification::from_score(10), NpsClassification::Promoter);
        assert_eq!(NpsClassification::from_score(9), NpsClassification::Promoter);
        assert_eq!(NpsClassification::from_score(8), NpsClassification::Passive);
        assert_eq!(NpsClassification::from_score(7), NpsClassification::Passive);
        assert_eq!(NpsClassification::from_score(6), NpsClassification::Detractor);
        assert_eq!(NpsClassification::from_score(0), NpsClassification::Detractor);
    }

    #[test]
    fn summary_score() {
        let summary = NpsSummary {
            promoters: 6,
            passives: 2,
            detractors: 2,
            total: 10,
        };
        assert_eq!(summary.score(), 40.0);

        let empty = NpsSummary {
            promoters: 0,
            passives: 0,
            detractors: 0,
            total: 0,
        };
        assert_eq!(empty.score(), 0.0);
    }
}
