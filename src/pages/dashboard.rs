//! Dashboard Page
//!
//! Main dashboard view showing headline stats, level progress and today's
//! study goal.

use leptos::*;
use leptos_router::*;

use crate::components::streak_badge::streak_label;
use crate::components::{BadgeSize, ProgressRing, StatColor, StatsCard, StreakBadge, XpBar};
use crate::content::MATHS;
use crate::state::profile::AppState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <DashboardHeader />
            <StatsGrid />
            <LevelSection />

            // Two column layout for the goal ring and subject snapshot
            <div class="grid md:grid-cols-2 gap-8">
                <DailyGoal />
                <SubjectOverview />
            </div>
        </div>
    }
}

#[component]
fn DashboardHeader() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let state_for_name = state.clone();
    let state_for_badge = state.clone();
    let today = chrono::Local::now().format("%A, %B %d").to_string();

    view! {
        <div class="flex items-center justify-between">
            <div>
                <p class="text-gray-400 text-sm">{today}</p>
                <h1 class="text-3xl font-bold mt-1">
                    {move || format!("Welcome back, {}", state_for_name.profile.get().name)}
                </h1>
            </div>
            {move || {
                let profile = state_for_badge.profile.get();
                view! {
                    <StreakBadge streak=profile.streak_days size=BadgeSize::Large />
                }
            }}
        </div>
    }
}

/// Headline statistics row
#[component]
fn StatsGrid() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let navigate = use_navigate();

    let state_for_streak = state.clone();
    let on_streak_click = Callback::new(move |_: web_sys::MouseEvent| {
        let streak = state_for_streak.profile.get().streak_days;
        state_for_streak.show_success(&format!(
            "Streak alive: {} in a row. Keep it up!",
            streak_label(streak)
        ));
    });
    let on_lessons_click = Callback::new(move |_: web_sys::MouseEvent| {
        navigate("/topics", Default::default());
    });

    view! {
        <section>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {move || {
                    let profile = state.profile.get();
                    view! {
                        <StatsCard
                            icon="⚡"
                            label="Total XP"
                            value=profile.total_xp
                            color=StatColor::Amber
                        />
                        <StatsCard
                            icon="🔥"
                            label="Day Streak"
                            value=profile.streak_days
                            color=StatColor::Rose
                            delay=100
                            on_click=on_streak_click
                        />
                        <StatsCard
                            icon="📚"
                            label="Lessons Completed"
                            value=profile.lessons_completed
                            color=StatColor::Emerald
                            delay=200
                            on_click=on_lessons_click
                        />
                        <StatsCard
                            icon="🎯"
                            label="Quizzes Passed"
                            value=profile.quizzes_passed
                            color=StatColor::Purple
                            delay=300
                        />
                    }
                }}
            </div>
        </section>
    }
}

/// Progress toward the next level
#[component]
fn LevelSection() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Level Progress"</h2>
            {move || {
                let profile = state.profile.get();
                view! {
                    <XpBar
                        current_xp=profile.current_xp
                        level_xp=profile.level_xp
                        level=profile.level
                    />
                }
            }}
        </section>
    }
}

/// Today's study goal ring with a quick log action
#[component]
fn DailyGoal() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let state_for_ring = state.clone();
    let state_for_log = state.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Today's Goal"</h2>
            <div class="flex flex-col items-center space-y-4">
                {move || {
                    let profile = state_for_ring.profile.get();
                    view! {
                        <ProgressRing
                            progress=profile.daily_goal_percentage()
                            size=140.0
                            stroke_width=10.0
                        >
                            <div class="text-center">
                                <div class="text-2xl font-bold">
                                    {format!("{:.0}%", profile.daily_goal_percentage())}
                                </div>
                                <div class="text-xs text-gray-400">
                                    {format!(
                                        "{} / {} min",
                                        profile.minutes_today, profile.daily_goal_minutes
                                    )}
                                </div>
                            </div>
                        </ProgressRing>
                    }
                }}
                <button
                    class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg text-sm font-medium transition-colors"
                    on:click=move |_| {
                        state_for_log.log_minutes(5);
                        state_for_log.show_success("Logged 5 minutes of study");
                    }
                >
                    "Log 5 minutes"
                </button>
            </div>
        </section>
    }
}

/// Snapshot of progress across the maths syllabus
#[component]
fn SubjectOverview() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">{MATHS.name}</h2>
                <A href="/topics" class="text-sm text-indigo-400 hover:text-indigo-300">
                    "View all →"
                </A>
            </div>
            <div class="space-y-3">
                {MATHS.topics.iter().map(|topic| {
                    let state = state.clone();
                    view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                            <div class="flex items-center space-x-3">
                                <span class="text-2xl">{category_icon(topic.category)}</span>
                                <div>
                                    <div class="font-medium">{topic.name}</div>
                                    <div class="text-gray-400 text-sm">
                                        {format!("+{} XP on completion", topic.xp_reward)}
                                    </div>
                                </div>
                            </div>
                            {move || {
                                let progress = state.profile.get().progress_for(topic.slug);
                                view! {
                                    <ProgressRing
                                        progress=progress
                                        size=56.0
                                        stroke_width=6.0
                                        color="#34d399"
                                    >
                                        <span class="text-xs font-semibold">
                                            {format!("{:.0}%", progress)}
                                        </span>
                                    </ProgressRing>
                                }
                            }}
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

/// Get icon for syllabus category
fn category_icon(category: &str) -> &'static str {
    match category {
        "number" => "🔢",
        "algebra" => "✖️",
        "geometry" => "📐",
        "statistics" => "📊",
        "measurement" => "📏",
        _ => "📘",
    }
}
