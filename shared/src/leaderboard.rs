use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub character_name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub level: i32,
    pub experience: i64,
    pub gold: i64,
    pub quests_completed: i64,
}

/// Sort key for `GET /leaderboard?sortBy=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardSort {
    #[default]
    Experience,
    Level,
    Gold,
    Quests,
}

impl LeaderboardSort {
    pub const ALL: [LeaderboardSort; 4] = [
        LeaderboardSort::Experience,
        LeaderboardSort::Level,
        LeaderboardSort::Gold,
        LeaderboardSort::Quests,
    ];

    /// Value of the `sortBy` query parameter.
    pub fn query_value(&self) -> &'static str {
        match self {
            LeaderboardSort::Experience => "experience",
            LeaderboardSort::Level => "level",
            LeaderboardSort::Gold => "gold",
            LeaderboardSort::Quests => "quests",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaderboardSort::Experience => "Experience",
            LeaderboardSort::Level => "Level",
            LeaderboardSort::Gold => "Gold",
            LeaderboardSort::Quests => "Quests completed",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.query_value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_round_trip() {
        for sort in LeaderboardSort::ALL {
            assert_eq!(LeaderboardSort::from_query_value(sort.query_value()), Some(sort));
        }
        assert_eq!(LeaderboardSort::from_query_value("bogus"), None);
    }
}
