//! Navigation Component
//!
//! Header navigation bar with logo, links and the current streak.

use leptos::*;
use leptos_router::*;

use crate::components::{BadgeSize, StreakBadge};
use crate::state::profile::AppState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎓"</span>
                        <span class="text-xl font-bold text-white">"Scholar"</span>
                    </A>

                    // Navigation links and streak
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/topics" label="Topics" />
                        <div class="pl-3">
                            {move || {
                                let profile = state.profile.get();
                                view! {
                                    <StreakBadge streak=profile.streak_days size=BadgeSize::Small />
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
