use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub quest_id: i64,
    pub title: String,
    pub description: String,
    pub experience_reward: i64,
    pub gold_reward: i64,
    pub required_level: i32,
}

/// Create/update payload for the admin quest editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestUpsert {
    pub title: String,
    pub description: String,
    pub experience_reward: i64,
    pub gold_reward: i64,
    pub required_level: i32,
}

/// A quest the character has already satisfied. Used only to disable repeat
/// attempts in the UI; the backend enforces the rule regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCompletion {
    pub quest_id: i64,
    pub completed_on: DateTime<Utc>,
    pub experience_gained: i64,
    pub gold_gained: i64,
}

impl QuestCompletion {
    /// Builds the local completion record for a freshly successful attempt,
    /// so the list can be updated without a round trip.
    pub fn from_attempt(quest_id: i64, outcome: &QuestAttemptOutcome, now: DateTime<Utc>) -> Self {
        Self {
            quest_id,
            completed_on: now,
            experience_gained: outcome.experience_gained,
            gold_gained: outcome.gold_gained,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestAttemptRequest {
    pub quest_id: i64,
    pub character_id: i64,
}

/// Backend verdict on a quest attempt.
///
/// `already_completed` is informational, not an error: the backend refuses to
/// pay out twice and the client must not mutate any character state for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestAttemptOutcome {
    pub success: bool,
    #[serde(default)]
    pub already_completed: bool,
    #[serde(default)]
    pub experience_gained: i64,
    #[serde(default)]
    pub gold_gained: i64,
    #[serde(default)]
    pub level_up: bool,
    #[serde(default)]
    pub new_level: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// True when the quest is in the character's completed list.
pub fn is_completed(quest_id: i64, completions: &[QuestCompletion]) -> bool {
    completions.iter().any(|c| c.quest_id == quest_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_defaults_cover_sparse_bodies() {
        // An already-completed refusal typically carries only these fields.
        let json = r#"{"success": false, "alreadyCompleted": true, "message": "Quest already completed"}"#;
        let o: QuestAttemptOutcome = serde_json::from_str(json).unwrap();
        assert!(o.already_completed);
        assert_eq!(o.experience_gained, 0);
        assert_eq!(o.gold_gained, 0);
        assert!(!o.level_up);
        assert_eq!(o.new_level, None);
    }

    #[test]
    fn completion_record_mirrors_attempt_rewards() {
        let outcome = QuestAttemptOutcome {
            success: true,
            already_completed: false,
            experience_gained: 50,
            gold_gained: 10,
            level_up: true,
            new_level: Some(4),
            message: None,
        };
        let now = "2025-03-01T12:00:00Z".parse().unwrap();
        let rec = QuestCompletion::from_attempt(9, &outcome, now);
        assert_eq!(rec.quest_id, 9);
        assert_eq!(rec.experience_gained, 50);
        assert_eq!(rec.gold_gained, 10);
        assert_eq!(rec.completed_on, now);
    }

    #[test]
    fn is_completed_matches_by_quest_id() {
        let completions = vec![QuestCompletion {
            quest_id: 3,
            completed_on: "2025-01-01T00:00:00Z".parse().unwrap(),
            experience_gained: 20,
            gold_gained: 5,
        }];
        assert!(is_completed(3, &completions));
        assert!(!is_completed(4, &completions));
    }
}
