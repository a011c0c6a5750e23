//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::streak_badge::streak_label;
use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Topics};
use crate::state::profile::{provide_app_state, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/topics" view=Topics />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with streak and level summary
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing the streak and distance to the next level
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let state_for_streak = state.clone();
    let state_for_xp = state.clone();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <span class="text-amber-300">
                    {move || {
                        let profile = state_for_streak.profile.get();
                        format!("🔥 Streak: {}", streak_label(profile.streak_days))
                    }}
                </span>
                <span class="text-gray-400">
                    {move || {
                        let profile = state_for_xp.profile.get();
                        format!("{} XP to level {}", profile.xp_to_next_level(), profile.level + 1)
                    }}
                </span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"📖"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"That page is not on the syllabus."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
            >
                "Back to Dashboard"
            </A>
        </div>
    }
}
