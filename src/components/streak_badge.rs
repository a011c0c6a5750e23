//! Streak Badge Component
//!
//! Pill badge showing the learner's consecutive-day streak.

use leptos::*;

/// Badge sizing presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Small,
    #[default]
    Default,
    Large,
}

impl BadgeSize {
    /// Container and flame classes for each preset
    fn classes(self) -> (&'static str, &'static str) {
        match self {
            BadgeSize::Small => ("px-2 py-0.5 text-xs gap-1", "text-sm"),
            BadgeSize::Default => ("px-3 py-1 text-sm gap-1.5", "text-base"),
            BadgeSize::Large => ("px-4 py-1.5 text-base gap-2", "text-2xl"),
        }
    }
}

/// Day-count label: "1 day", otherwise "{n} days".
pub fn streak_label(streak: u32) -> String {
    if streak == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", streak)
    }
}

/// Consecutive-day streak badge with a wiggling flame
#[component]
pub fn StreakBadge(
    /// Streak length in days
    streak: u32,
    #[prop(default = BadgeSize::Default)]
    size: BadgeSize,
) -> impl IntoView {
    let (container, flame) = size.classes();

    view! {
        <span class=format!(
            "inline-flex items-center rounded-full font-semibold \
             bg-gradient-to-r from-amber-500/20 to-orange-500/20 \
             border border-amber-500/40 text-amber-300 {}",
            container
        )>
            <span class=format!("animate-wiggle {}", flame)>"🔥"</span>
            <span>{streak_label(streak)}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_day_is_singular() {
        assert_eq!(streak_label(1), "1 day");
    }

    #[test]
    fn test_zero_days_is_plural() {
        assert_eq!(streak_label(0), "0 days");
    }

    #[test]
    fn test_longer_streaks_are_plural() {
        assert_eq!(streak_label(2), "2 days");
        assert_eq!(streak_label(30), "30 days");
    }
}
