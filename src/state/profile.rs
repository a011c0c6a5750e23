//! Learner Profile State
//!
//! Reactive state management using Leptos signals. The profile is the
//! single source of truth for the XP, streak and progress figures shown
//! across the dashboard, and persists to localStorage so a reload picks
//! up where the learner left off.

use leptos::*;
use std::collections::HashMap;

/// localStorage key for the cached profile
const PROFILE_STORAGE_KEY: &str = "scholar_profile";

/// Gamification snapshot for the signed-in learner
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct LearnerProfile {
    pub name: String,
    pub level: u32,
    pub total_xp: u32,
    /// XP earned within the current level
    pub current_xp: u32,
    /// XP required to finish the current level
    pub level_xp: u32,
    pub streak_days: u32,
    pub lessons_completed: u32,
    pub quizzes_passed: u32,
    pub minutes_today: u32,
    pub daily_goal_minutes: u32,
    /// Completion percentage per topic, keyed by topic slug
    #[serde(default)]
    pub topic_progress: HashMap<String, f64>,
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            level: 3,
            total_xp: 1250,
            current_xp: 450,
            level_xp: 1000,
            streak_days: 3,
            lessons_completed: 12,
            quizzes_passed: 4,
            minutes_today: 10,
            daily_goal_minutes: 30,
            topic_progress: HashMap::from([("fractions".to_string(), 35.0)]),
        }
    }
}

impl LearnerProfile {
    /// Completion percentage for a topic, 0 when the learner has not started it
    pub fn progress_for(&self, slug: &str) -> f64 {
        self.topic_progress.get(slug).copied().unwrap_or(0.0)
    }

    /// Share of today's study goal reached. Deliberately unclamped so the
    /// goal ring can celebrate overshooting.
    pub fn daily_goal_percentage(&self) -> f64 {
        self.minutes_today as f64 / self.daily_goal_minutes as f64 * 100.0
    }

    /// XP still missing for the next level
    pub fn xp_to_next_level(&self) -> u32 {
        self.level_xp.saturating_sub(self.current_xp)
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// The learner's profile
    pub profile: RwSignal<LearnerProfile>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        profile: create_rw_signal(load_profile()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Record study minutes against today's goal and persist the profile
    pub fn log_minutes(&self, minutes: u32) {
        self.profile.update(|profile| {
            profile.minutes_today += minutes;
        });
        save_profile(&self.profile.get());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

/// Load the stored profile, falling back to the starter profile
pub fn load_profile() -> LearnerProfile {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(PROFILE_STORAGE_KEY) {
                match serde_json::from_str(&raw) {
                    Ok(profile) => return profile,
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Discarding corrupt stored profile: {}", e).into(),
                        );
                    }
                }
            }
        }
    }

    LearnerProfile::default()
}

/// Persist the profile to localStorage
pub fn save_profile(profile: &LearnerProfile) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(profile) {
                let _ = storage.set_item(PROFILE_STORAGE_KEY, &raw);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_consistent() {
        let profile = LearnerProfile::default();
        assert!(profile.level >= 1);
        assert!(profile.level_xp > 0);
        assert!(profile.current_xp < profile.level_xp);
        assert!(profile.daily_goal_minutes > 0);
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = LearnerProfile::default();
        let raw = serde_json::to_string(&profile).unwrap();
        let restored: LearnerProfile = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn test_unknown_topic_reports_zero_progress() {
        let profile = LearnerProfile::default();
        assert_eq!(profile.progress_for("decimals"), 0.0);
        assert!(profile.progress_for("fractions") > 0.0);
    }

    #[test]
    fn test_xp_to_next_level_saturates() {
        let profile = LearnerProfile {
            current_xp: 1400,
            level_xp: 1000,
            ..LearnerProfile::default()
        };
        assert_eq!(profile.xp_to_next_level(), 0);
    }
}
