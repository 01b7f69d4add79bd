//! Lifestyle survey preferences.
//!
//! The survey vocabulary is closed (the backend scores compatibility against
//! these exact values), so each field is an enum rather than a free string.

use serde::{Deserialize, Serialize};

/// The lifestyle survey attached to an identity.
///
/// Used by the backend to compute cat compatibility scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub home_type: HomeType,
    pub activity_level: ActivityLevel,
    pub has_kids: bool,
    pub experience_level: ExperienceLevel,
    pub preferred_personality: Personality,
}

/// Type of home the adopter lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeType {
    Apartment,
    House,
    Farm,
}

/// How active the adopter's household is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

/// How much experience the adopter has with cats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Experienced,
}

/// Personality the adopter is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Playful,
    Calm,
    Independent,
    Social,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_use_camel_case_wire_names() {
        let prefs = Preferences {
            home_type: HomeType::Apartment,
            activity_level: ActivityLevel::Moderate,
            has_kids: true,
            experience_level: ExperienceLevel::Beginner,
            preferred_personality: Personality::Calm,
        };

        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["homeType"], "apartment");
        assert_eq!(json["activityLevel"], "moderate");
        assert_eq!(json["hasKids"], true);
        assert_eq!(json["experienceLevel"], "beginner");
        assert_eq!(json["preferredPersonality"], "calm");
    }

    #[test]
    fn test_preferences_roundtrip() {
        let json = r#"{
            "homeType": "farm",
            "activityLevel": "high",
            "hasKids": false,
            "experienceLevel": "experienced",
            "preferredPersonality": "independent"
        }"#;
        let prefs: Preferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.home_type, HomeType::Farm);
        assert_eq!(prefs.preferred_personality, Personality::Independent);
    }
}
