//! Stat Card Component
//!
//! Dashboard summary tile: icon on a gradient, a big number, a label.
//! Clicking navigates to the backing view.

use leptos::*;
use leptos_router::use_navigate;

/// Dashboard stat tile
#[component]
pub fn StatCard(
    /// Tile icon
    icon: &'static str,
    /// Gradient behind the icon
    gradient: &'static str,
    /// The aggregate value to display
    value: u32,
    /// Label under the value
    label: &'static str,
    /// Route to navigate to on click
    href: &'static str,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div
            class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600
                   transition-colors cursor-pointer"
            on:click=move |_| navigate(href, Default::default())
        >
            <div
                class="w-12 h-12 rounded-xl flex items-center justify-center text-2xl mb-3"
                style=format!("background: {}", gradient)
            >
                {icon}
            </div>
            <div class="text-3xl font-bold">{value}</div>
            <div class="text-gray-400 text-sm mt-1">{label}</div>
        </div>
    }
}
