//! Teams Page
//!
//! Table of all teams competing on the platform.

use leptos::*;

use crate::api;
use crate::api::types::Team;
use crate::components::{EmptyState, ErrorCard, Loading};
use crate::state::FetchState;
use crate::theme::format_date;

/// Teams listing page
#[component]
pub fn Teams() -> impl IntoView {
    let (state, set_state) = create_signal(FetchState::<Vec<Team>>::Loading);

    // Fetch on mount
    create_effect(move |_| {
        spawn_local(async move {
            set_state.set(api::fetch_teams().await.into());
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"🏆 Teams"</h1>
                <p class="text-gray-400 mt-1">"Teams competing for the top of the leaderboard"</p>
            </div>

            {move || match state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(reason) => view! { <ErrorCard message=reason /> }.into_view(),
                FetchState::Ready(teams) => {
                    if teams.is_empty() {
                        view! {
                            <EmptyState icon="🏆" message="No teams found" />
                        }.into_view()
                    } else {
                        view! {
                            <div class="bg-gray-800 rounded-xl overflow-hidden">
                                <table class="w-full text-left">
                                    <thead class="bg-gray-700 text-gray-300 text-sm uppercase">
                                        <tr>
                                            <th class="px-4 py-3">"Team"</th>
                                            <th class="px-4 py-3">"Description"</th>
                                            <th class="px-4 py-3">"Created"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {teams.into_iter().map(|team| view! {
                                            <tr class="border-t border-gray-700 hover:bg-gray-750">
                                                <td class="px-4 py-3 font-semibold">{team.name}</td>
                                                <td class="px-4 py-3 text-gray-400">
                                                    {team.description.unwrap_or_default()}
                                                </td>
                                                <td class="px-4 py-3 text-gray-400">
                                                    {team.created_at
                                                        .as_deref()
                                                        .map(format_date)
                                                        .unwrap_or_default()}
                                                </td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
