//! Workouts Page
//!
//! Card grid of suggested workouts with difficulty badges.

use leptos::*;

use crate::api;
use crate::api::types::Workout;
use crate::components::{EmptyState, ErrorCard, Loading};
use crate::state::FetchState;
use crate::theme::difficulty_badge_class;

/// Workout suggestions page
#[component]
pub fn Workouts() -> impl IntoView {
    let (state, set_state) = create_signal(FetchState::<Vec<Workout>>::Loading);

    // Fetch on mount
    create_effect(move |_| {
        spawn_local(async move {
            set_state.set(api::fetch_workouts().await.into());
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"💪 Workout Suggestions"</h1>
                <p class="text-gray-400 mt-1">"Pick a routine and get moving"</p>
            </div>

            {move || match state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(reason) => view! { <ErrorCard message=reason /> }.into_view(),
                FetchState::Ready(workouts) => {
                    if workouts.is_empty() {
                        view! {
                            <EmptyState icon="💪" message="No workout suggestions available" />
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {workouts.into_iter().map(|workout| {
                                    view! { <WorkoutCard workout=workout /> }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Single workout card
#[component]
fn WorkoutCard(workout: Workout) -> impl IntoView {
    let difficulty = workout.difficulty.clone().unwrap_or_default();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <h3 class="font-semibold text-lg">{workout.name}</h3>
            <p class="text-gray-400 text-sm mt-1">
                {workout.description.unwrap_or_default()}
            </p>

            <div class="space-y-1 mt-4 text-sm">
                <div>
                    <span class="text-gray-400">"Category: "</span>
                    {workout.category.unwrap_or_default()}
                </div>
                <div>
                    <span class="text-gray-400">"Duration: "</span>
                    {workout.duration.unwrap_or(0)} " minutes"
                </div>
                <div class="flex items-center space-x-2">
                    <span class="text-gray-400">"Difficulty:"</span>
                    <span class=difficulty_badge_class(&difficulty)>
                        {difficulty.clone()}
                    </span>
                </div>
            </div>
        </div>
    }
}
