//! Maths Syllabus
//!
//! Static topic catalogue for the mathematics subject. Progress against
//! these topics lives in the learner profile, keyed by topic slug.

/// Difficulty band for a topic
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// A single teachable topic
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Topic {
    /// Stable identifier, also the key for progress records
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Position in the recommended learning order, starting at 1
    pub order: u32,
    pub difficulty: Difficulty,
    pub estimated_hours: f32,
    pub xp_reward: u32,
    pub skills: &'static [&'static str],
    pub category: &'static str,
}

/// A subject groups an ordered run of topics
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Subject {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub topics: &'static [Topic],
}

pub const MATHS_TOPICS: &[Topic] = &[Topic {
    slug: "fractions",
    name: "Fractions",
    description: "Parts of a whole: representing, comparing and calculating with fractions.",
    order: 1,
    difficulty: Difficulty::Beginner,
    estimated_hours: 3.0,
    xp_reward: 150,
    skills: &[
        "Equivalent fractions",
        "Simplifying fractions",
        "Adding and subtracting fractions",
        "Multiplying and dividing fractions",
    ],
    category: "number",
}];

pub const MATHS: Subject = Subject {
    slug: "maths",
    name: "Mathematics",
    description: "Build number sense one topic at a time.",
    topics: MATHS_TOPICS,
};

pub const IMPORT_DEPRECATED: &str =
    "This import method is deprecated. Use AI Question Generator instead.";

/// Bulk importer for legacy content bundles. Always fails; content now
/// arrives through the AI question generator.
#[deprecated(note = "use the AI question generator instead")]
pub async fn import_maths_content() -> Result<(), String> {
    Err(IMPORT_DEPRECATED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllabus_has_single_seed_topic() {
        assert_eq!(MATHS_TOPICS.len(), 1);
        assert_eq!(MATHS_TOPICS[0].slug, "fractions");
        assert_eq!(MATHS_TOPICS[0].order, 1);
    }

    #[test]
    fn test_seed_topic_fully_described() {
        let topic = &MATHS_TOPICS[0];
        assert!(!topic.name.is_empty());
        assert!(!topic.description.is_empty());
        assert!(!topic.skills.is_empty());
        assert!(topic.xp_reward > 0);
        assert!(topic.estimated_hours > 0.0);
        assert_eq!(topic.category, "number");
    }

    #[test]
    fn test_subject_wires_seed_topics() {
        assert_eq!(MATHS.slug, "maths");
        assert_eq!(MATHS.topics.len(), MATHS_TOPICS.len());
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Beginner).unwrap();
        assert_eq!(json, "\"beginner\"");
    }

    #[test]
    #[allow(deprecated)]
    fn test_import_always_reports_deprecation() {
        let result = futures::executor::block_on(import_maths_content());
        assert_eq!(result, Err(IMPORT_DEPRECATED.to_string()));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    #[allow(deprecated)]
    async fn test_import_fails_in_browser() {
        let result = import_maths_content().await;
        assert_eq!(result, Err(IMPORT_DEPRECATED.to_string()));
    }
}
