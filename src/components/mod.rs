//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod progress;
pub mod progress_ring;
pub mod stats_card;
pub mod streak_badge;
pub mod toast;
pub mod xp_bar;

pub use nav::Nav;
pub use progress::Progress;
pub use progress_ring::ProgressRing;
pub use stats_card::{StatColor, StatsCard};
pub use streak_badge::{BadgeSize, StreakBadge};
pub use toast::Toast;
pub use xp_bar::XpBar;
