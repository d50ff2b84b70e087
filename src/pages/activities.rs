//! Activities Page
//!
//! Card grid of every logged activity, styled by activity type.

use leptos::*;

use crate::api;
use crate::api::types::Activity;
use crate::components::{EmptyState, ErrorCard, Loading};
use crate::state::FetchState;
use crate::theme::{activity_gradient, activity_icon, format_date};

/// Activities listing page
#[component]
pub fn Activities() -> impl IntoView {
    let (state, set_state) = create_signal(FetchState::<Vec<Activity>>::Loading);

    // Fetch on mount
    create_effect(move |_| {
        spawn_local(async move {
            set_state.set(api::fetch_activities().await.into());
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"⚡ Activities"</h1>
                <p class="text-gray-400 mt-1">"Every session logged on the platform"</p>
            </div>

            {move || match state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(reason) => view! { <ErrorCard message=reason /> }.into_view(),
                FetchState::Ready(activities) => {
                    if activities.is_empty() {
                        view! {
                            <EmptyState icon="🏃" message="No activities found" />
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {activities.into_iter().map(|activity| {
                                    view! { <ActivityCard activity=activity /> }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Single activity card
#[component]
fn ActivityCard(activity: Activity) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-center space-x-3">
                <div
                    class="w-12 h-12 rounded-xl flex items-center justify-center text-2xl flex-shrink-0"
                    style=format!("background: {}", activity_gradient(&activity.activity_type))
                >
                    {activity_icon(&activity.activity_type)}
                </div>
                <div>
                    <div class="font-semibold">{activity.user_display().to_string()}</div>
                    <div class="text-gray-400 text-sm">{activity.activity_type.clone()}</div>
                </div>
            </div>

            <div class="flex items-center space-x-6 mt-4 text-sm">
                <div>
                    <span class="font-semibold">"⏱️ " {activity.duration.unwrap_or(0)}</span>
                    <span class="text-gray-400 ml-1">"min"</span>
                </div>
                <div>
                    <span class="font-semibold">
                        {format!("📍 {:.1}", activity.distance.unwrap_or(0.0))}
                    </span>
                    <span class="text-gray-400 ml-1">"km"</span>
                </div>
            </div>

            <div class="mt-4 pt-3 border-t border-gray-700 text-gray-400 text-sm">
                {activity.date.as_deref().map(format_date).unwrap_or_default()}
            </div>
        </div>
    }
}
