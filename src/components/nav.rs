//! Navigation Component
//!
//! Header navigation bar with logo and links to every view.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏋️"</span>
                        <span class="text-xl font-bold text-white">"OctoFit"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" icon="🏠" label="Dashboard" />
                        <NavLink href="/users" icon="👥" label="Athletes" />
                        <NavLink href="/teams" icon="🏆" label="Teams" />
                        <NavLink href="/activities" icon="⚡" label="Activities" />
                        <NavLink href="/workouts" icon="💪" label="Workouts" />
                        <NavLink href="/leaderboard" icon="🎯" label="Leaderboard" />
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
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            <span class="mr-1">{icon}</span>
            {label}
        </A>
    }
}
