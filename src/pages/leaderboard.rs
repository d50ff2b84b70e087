//! Leaderboard Page
//!
//! Podium for the top three, ranked table for everyone else. Entries
//! arrive pre-sorted from the server and are never re-sorted here.

use leptos::*;

use crate::api;
use crate::api::types::LeaderboardEntry;
use crate::components::{EmptyState, ErrorCard, Loading};
use crate::state::FetchState;
use crate::theme::{medal_gradient, AchievementTier};

/// Split the server-ordered entries into the podium and the rest
fn split_podium(entries: &[LeaderboardEntry]) -> (&[LeaderboardEntry], &[LeaderboardEntry]) {
    entries.split_at(entries.len().min(3))
}

/// Leaderboard page
#[component]
pub fn Leaderboard() -> impl IntoView {
    let (state, set_state) = create_signal(FetchState::<Vec<LeaderboardEntry>>::Loading);

    // Fetch on mount
    create_effect(move |_| {
        spawn_local(async move {
            set_state.set(api::fetch_leaderboard().await.into());
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"🎯 Leaderboard"</h1>
                <p class="text-gray-400 mt-1">"Who earned the most points"</p>
            </div>

            {move || match state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(reason) => view! { <ErrorCard message=reason /> }.into_view(),
                FetchState::Ready(entries) => {
                    if entries.is_empty() {
                        view! {
                            <EmptyState icon="🎯" message="No leaderboard data available" />
                        }.into_view()
                    } else {
                        let (podium, rest) = split_podium(&entries);
                        let podium = podium.to_vec();
                        let rest = rest.to_vec();
                        view! {
                            // Podium
                            <div class="grid md:grid-cols-3 gap-4">
                                {podium.into_iter().enumerate().map(|(i, entry)| {
                                    view! { <PodiumCard rank=i + 1 entry=entry /> }
                                }).collect_view()}
                            </div>

                            // The rest, ranked from 4
                            {(!rest.is_empty()).then(|| view! {
                                <div class="bg-gray-800 rounded-xl overflow-hidden">
                                    <table class="w-full text-left">
                                        <thead class="bg-gray-700 text-gray-300 text-sm uppercase">
                                            <tr>
                                                <th class="px-4 py-3">"Rank"</th>
                                                <th class="px-4 py-3">"Athlete"</th>
                                                <th class="px-4 py-3">"Team"</th>
                                                <th class="px-4 py-3">"Badges"</th>
                                                <th class="px-4 py-3 text-right">"Points"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rest.into_iter().enumerate().map(|(i, entry)| {
                                                let points = entry.points();
                                                view! {
                                                    <tr class="border-t border-gray-700 hover:bg-gray-750">
                                                        <td class="px-4 py-3 text-gray-400">{i + 4}</td>
                                                        <td class="px-4 py-3 font-semibold">
                                                            {entry.user_display().to_string()}
                                                        </td>
                                                        <td class="px-4 py-3 text-gray-400">
                                                            {entry.team_display().to_string()}
                                                        </td>
                                                        <td class="px-4 py-3">
                                                            // Top two earned tiers
                                                            {AchievementTier::tiers_for(points)
                                                                .into_iter()
                                                                .take(2)
                                                                .map(|tier| view! {
                                                                    <span class="mr-1" title=tier.label()>
                                                                        {tier.icon()}
                                                                    </span>
                                                                })
                                                                .collect_view()}
                                                        </td>
                                                        <td class="px-4 py-3 text-right font-bold">{points}</td>
                                                    </tr>
                                                }
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            })}
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Medal-styled card for a podium entry
#[component]
fn PodiumCard(rank: usize, entry: LeaderboardEntry) -> impl IntoView {
    let points = entry.points();
    let initial = entry
        .user_display()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 text-center">
            <div
                class="w-20 h-20 rounded-full mx-auto mb-4 flex items-center justify-center
                       text-2xl font-bold text-gray-900 shadow-lg"
                style=format!("background: {}", medal_gradient(rank))
            >
                {initial}
            </div>
            <div class="text-gray-400 text-sm mb-1">{format!("#{}", rank)}</div>
            <div class="text-lg font-bold">{entry.user_display().to_string()}</div>
            <div class="text-gray-400 text-sm mb-2">{entry.team_display().to_string()}</div>
            <div class="text-2xl font-extrabold">{points} " pts"</div>
            {AchievementTier::top_tier(points).map(|tier| view! {
                <div class="mt-2 text-sm text-gray-300">
                    {tier.icon()} " " {tier.label()}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(user: &str, total_points: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            user: Some(user.to_string()),
            total_points: Some(total_points),
            ..Default::default()
        }
    }

    #[test]
    fn test_podium_takes_first_three_rest_ranks_from_four() {
        let entries = vec![
            entry("A", 1200),
            entry("B", 300),
            entry("C", 50),
            entry("D", 10),
        ];
        let (podium, rest) = split_podium(&entries);

        let podium_users: Vec<&str> = podium.iter().map(|e| e.user_display()).collect();
        assert_eq!(podium_users, vec!["A", "B", "C"]);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].user_display(), "D");

        // A holds the top badge tier
        assert_eq!(
            AchievementTier::top_tier(podium[0].points()),
            Some(AchievementTier::Gold)
        );
    }

    #[test]
    fn test_short_leaderboard_has_no_rest() {
        let entries = vec![entry("A", 500), entry("B", 100)];
        let (podium, rest) = split_podium(&entries);
        assert_eq!(podium.len(), 2);
        assert!(rest.is_empty());

        let (podium, rest) = split_podium(&[]);
        assert!(podium.is_empty());
        assert!(rest.is_empty());
    }
}
