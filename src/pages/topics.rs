//! Topics Page
//!
//! Full maths syllabus with per-topic progress and content tools.

use leptos::*;

use crate::components::ProgressRing;
use crate::content::maths::{self, Difficulty, Topic};
use crate::content::MATHS;
use crate::state::profile::AppState;

/// Topics page component
#[component]
pub fn Topics() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">{MATHS.name}</h1>
                <p class="text-gray-400 mt-1">{MATHS.description}</p>
            </div>

            // Topic cards
            <div class="grid md:grid-cols-2 gap-4">
                {MATHS.topics.iter().map(|topic| view! {
                    <TopicCard topic=topic />
                }).collect_view()}
            </div>

            <DifficultyLegend />

            <LegacyImport />
        </div>
    }
}

/// Single topic card with progress ring and skill chips
#[component]
fn TopicCard(topic: &'static Topic) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between">
                <div>
                    <div class="flex items-center space-x-2">
                        <h3 class="text-lg font-semibold">{topic.name}</h3>
                        <span class=format!(
                            "text-xs px-2 py-0.5 rounded-full text-white {}",
                            difficulty_color(topic.difficulty)
                        )>
                            {topic.difficulty.label()}
                        </span>
                    </div>
                    <p class="text-gray-400 text-sm mt-1">{topic.description}</p>
                </div>
                {move || {
                    let progress = state.profile.get().progress_for(topic.slug);
                    view! {
                        <ProgressRing
                            progress=progress
                            size=56.0
                            stroke_width=6.0
                            color="#818cf8"
                        >
                            <span class="text-xs font-semibold">{format!("{:.0}%", progress)}</span>
                        </ProgressRing>
                    }
                }}
            </div>

            // Meta row
            <div class="flex items-center space-x-4 text-sm text-gray-400 mt-4">
                <span>{format!("⏱ {} h", topic.estimated_hours)}</span>
                <span>{format!("⚡ {} XP", topic.xp_reward)}</span>
                <span class="capitalize">{format!("📂 {}", topic.category)}</span>
            </div>

            // Skills covered
            <div class="flex flex-wrap gap-2 mt-4">
                {topic.skills.iter().map(|skill| view! {
                    <span class="px-3 py-1 bg-gray-700 rounded-full text-xs text-gray-300">
                        {*skill}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Legend mapping badge colors to difficulty bands
#[component]
fn DifficultyLegend() -> impl IntoView {
    let bands = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    view! {
        <div class="flex items-center space-x-6 text-sm text-gray-400">
            {bands.into_iter().map(|band| view! {
                <span class="flex items-center space-x-2">
                    <span class=format!("w-3 h-3 rounded-full {}", difficulty_color(band))></span>
                    <span>{band.label()}</span>
                </span>
            }).collect_view()}
        </div>
    }
}

/// Legacy bulk-import entry point, kept for existing content bundles
#[component]
fn LegacyImport() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (importing, set_importing) = create_signal(false);

    let state_for_import = state;
    let run_import = move |_| {
        set_importing.set(true);

        let state_clone = state_for_import.clone();
        spawn_local(async move {
            #[allow(deprecated)]
            let result = maths::import_maths_content().await;
            match result {
                Ok(_) => {
                    state_clone.show_success("Content imported");
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_importing.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Content Tools"</h2>

            <div class="flex items-center justify-between p-4 bg-gray-700 rounded-lg">
                <div>
                    <h3 class="font-medium">"Import legacy content"</h3>
                    <p class="text-sm text-gray-400">"Bulk-load topics from a legacy content bundle"</p>
                </div>
                <button
                    on:click=run_import
                    disabled=move || importing.get()
                    class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if importing.get() { "Importing..." } else { "Import" }}
                </button>
            </div>
        </section>
    }
}

/// Badge color for a difficulty band
fn difficulty_color(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "bg-emerald-600",
        Difficulty::Intermediate => "bg-amber-600",
        Difficulty::Advanced => "bg-rose-600",
    }
}
