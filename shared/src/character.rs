use crate::QuestAttemptOutcome;
use serde::{Deserialize, Serialize};

/// A character owned by the logged-in user.
///
/// The backend is authoritative for every field; the client only mirrors the
/// selected character locally for fast rendering. At most one character per
/// user carries `is_selected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub character_id: i64,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub level: i32,
    pub experience: i64,
    pub gold: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_selected: bool,
}

impl Character {
    /// Merges a successful quest attempt into the character.
    ///
    /// Gold and experience are added; the level is replaced only when the
    /// backend reports a level-up. Selection state is untouched.
    pub fn apply_attempt(&mut self, outcome: &QuestAttemptOutcome) {
        self.experience += outcome.experience_gained;
        self.gold += outcome.gold_gained;
        if outcome.level_up {
            if let Some(level) = outcome.new_level {
                self.level = level;
            }
        }
    }
}

/// Catalog entry a user can create a character from. Managed by admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterTemplate {
    pub character_id: i64,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Create/update payload for the admin character catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterTemplateUpsert {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectCharacterRequest {
    pub character_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    pub character_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Character {
        Character {
            character_id: 7,
            name: "Aldric".to_string(),
            class_name: "Knight".to_string(),
            level: 3,
            experience: 120,
            gold: 40,
            image_url: None,
            is_selected: true,
        }
    }

    #[test]
    fn apply_attempt_adds_rewards_and_applies_level_up() {
        let mut c = knight();
        c.apply_attempt(&QuestAttemptOutcome {
            success: true,
            already_completed: false,
            experience_gained: 50,
            gold_gained: 10,
            level_up: true,
            new_level: Some(4),
            message: None,
        });
        assert_eq!(c.experience, 170);
        assert_eq!(c.gold, 50);
        assert_eq!(c.level, 4);
        assert!(c.is_selected);
    }

    #[test]
    fn apply_attempt_without_level_up_keeps_level() {
        let mut c = knight();
        c.apply_attempt(&QuestAttemptOutcome {
            success: true,
            already_completed: false,
            experience_gained: 5,
            gold_gained: 0,
            level_up: false,
            new_level: None,
            message: None,
        });
        assert_eq!(c.level, 3);
        assert_eq!(c.experience, 125);
    }

    #[test]
    fn character_deserializes_backend_casing() {
        let json = r#"{
            "characterId": 1,
            "name": "Mira",
            "class": "Mage",
            "level": 2,
            "experience": 30,
            "gold": 12,
            "imageUrl": "https://cdn.example/mage.png",
            "isSelected": false
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.class_name, "Mage");
        assert_eq!(c.image_url.as_deref(), Some("https://cdn.example/mage.png"));
        assert!(!c.is_selected);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "characterId": 2,
            "name": "Bram",
            "class": "Rogue",
            "level": 1,
            "experience": 0,
            "gold": 0
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.image_url, None);
        assert!(!c.is_selected);
    }
}
