//! XP Bar Component
//!
//! Horizontal bar encoding progress through the current level.

use leptos::*;

use crate::components::progress::Progress;

/// Share of the current level's XP already earned, as 0-100.
///
/// Clamped to 100: overflow XP fills the bar without overdrawing it.
/// A `level_xp` of zero divides to infinity (or NaN for 0/0), which the
/// `min` maps to 100.
pub fn xp_percentage(current_xp: u32, level_xp: u32) -> f64 {
    (current_xp as f64 / level_xp as f64 * 100.0).min(100.0)
}

/// Level progress bar with an optional label row
#[component]
pub fn XpBar(
    /// XP earned within the current level
    current_xp: u32,
    /// XP required to finish the current level
    level_xp: u32,
    /// Current level number
    level: u32,
    #[prop(default = true)]
    show_label: bool,
) -> impl IntoView {
    let percentage = xp_percentage(current_xp, level_xp);

    view! {
        <div class="space-y-2">
            {show_label.then(|| view! {
                <div class="flex items-center justify-between text-sm">
                    <span class="font-semibold text-gray-200">{format!("Level {}", level)}</span>
                    <span class="text-gray-400">{format!("{} / {} XP", current_xp, level_xp)}</span>
                </div>
            })}

            <Progress
                value=percentage
                indicator_class="bg-gradient-to-r from-indigo-500 to-purple-500"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halfway_through_a_level() {
        assert_eq!(xp_percentage(500, 1000), 50.0);
    }

    #[test]
    fn test_caps_at_one_hundred_percent() {
        assert_eq!(xp_percentage(1000, 1000), 100.0);
        assert_eq!(xp_percentage(2500, 1000), 100.0);
    }

    #[test]
    fn test_fresh_level_starts_at_zero() {
        assert_eq!(xp_percentage(0, 1000), 0.0);
    }

    #[test]
    fn test_stays_within_bounds_for_valid_inputs() {
        let samples = [(0, 1), (1, 3), (250, 1000), (999, 1000), (1000, 1000), (40_000, 750)];
        for (current, goal) in samples {
            let percentage = xp_percentage(current, goal);
            assert!(
                (0.0..=100.0).contains(&percentage),
                "{}/{} gave {}",
                current,
                goal,
                percentage
            );
        }
    }
}
