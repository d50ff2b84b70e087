//! Users Page
//!
//! Table of all athletes with per-row editing.

use leptos::*;

use crate::api;
use crate::api::types::User;
use crate::components::{EditUserModal, EmptyState, ErrorCard, Loading};
use crate::state::FetchState;

/// Replace a saved record in the list, matching by id
fn merge_updated(users: &mut Vec<User>, updated: User) {
    if let Some(existing) = users.iter_mut().find(|u| u.id == updated.id) {
        *existing = updated;
    }
}

/// Athletes listing page
#[component]
pub fn Users() -> impl IntoView {
    let state = create_rw_signal(FetchState::<Vec<User>>::Loading);
    let editing = create_rw_signal(None::<User>);

    // Fetch on mount
    create_effect(move |_| {
        spawn_local(async move {
            state.set(api::fetch_users().await.into());
        });
    });

    let on_save = move |updated: User| {
        state.update(|s| {
            if let FetchState::Ready(users) = s {
                merge_updated(users, updated);
            }
        });
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"👥 Athletes"</h1>
                <p class="text-gray-400 mt-1">"Everyone training on the platform"</p>
            </div>

            {move || match state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(reason) => view! { <ErrorCard message=reason /> }.into_view(),
                FetchState::Ready(users) => {
                    if users.is_empty() {
                        view! {
                            <EmptyState icon="👥" message="No athletes found" />
                        }.into_view()
                    } else {
                        view! {
                            <div class="bg-gray-800 rounded-xl overflow-hidden">
                                <table class="w-full text-left">
                                    <thead class="bg-gray-700 text-gray-300 text-sm uppercase">
                                        <tr>
                                            <th class="px-4 py-3">"Name"</th>
                                            <th class="px-4 py-3">"Email"</th>
                                            <th class="px-4 py-3">"Team"</th>
                                            <th class="px-4 py-3">"Points"</th>
                                            <th class="px-4 py-3"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {users.into_iter().map(|user| {
                                            let row = user.clone();
                                            view! {
                                                <tr class="border-t border-gray-700 hover:bg-gray-750">
                                                    <td class="px-4 py-3 font-semibold">{row.name.clone()}</td>
                                                    <td class="px-4 py-3 text-gray-400">{row.email.clone()}</td>
                                                    <td class="px-4 py-3">
                                                        {row.team_display().map(str::to_string)
                                                            .unwrap_or_else(|| "No team".to_string())}
                                                    </td>
                                                    <td class="px-4 py-3">{row.points()}</td>
                                                    <td class="px-4 py-3 text-right">
                                                        <button
                                                            on:click=move |_| editing.set(Some(user.clone()))
                                                            class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                                                        >
                                                            "✏️ Edit"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_view()
                    }
                }
            }}

            // Edit modal
            {move || {
                editing.get().map(|user| view! {
                    <EditUserModal
                        user=user
                        on_save=on_save
                        on_close=move || editing.set(None)
                    />
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_replaces_matching_row() {
        let mut users = vec![user("1", "Alice"), user("2", "Bob")];
        merge_updated(&mut users, user("2", "Robert"));
        assert_eq!(users[1].name, "Robert");
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_merge_ignores_unknown_id() {
        let mut users = vec![user("1", "Alice")];
        merge_updated(&mut users, user("9", "Ghost"));
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Alice");
    }
}
