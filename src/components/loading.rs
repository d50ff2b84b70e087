//! Loading, Error and Empty States
//!
//! Shared page-state components: spinner while a fetch is in flight,
//! error card when it fails, placeholder when it comes back empty.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Error card with the failure reason
#[component]
pub fn ErrorCard(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-8 text-center border border-red-900">
            <div class="text-4xl mb-3">"⚠️"</div>
            <p class="text-red-400">"Error: " {message}</p>
        </div>
    }
}

/// Placeholder for an empty collection, distinct from the error state
#[component]
pub fn EmptyState(
    #[prop(into)]
    icon: String,
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-12 text-center">
            <div class="text-5xl mb-4">{icon}</div>
            <p class="text-gray-400 text-lg">{message}</p>
        </div>
    }
}
