//! Dashboard Page
//!
//! Aggregate overview: four collections fetched concurrently, joined
//! all-or-nothing. One failing endpoint fails the whole dashboard; the
//! other pages are unaffected.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::api::client::DashboardData;
use crate::api::types::{Activity, LeaderboardEntry, User};
use crate::components::{ErrorCard, Loading, StatCard};
use crate::state::FetchState;
use crate::theme::{activity_gradient, activity_icon, format_date, medal_gradient};

/// Sum of all athletes' points, treating missing as zero
fn total_points(users: &[User]) -> u32 {
    users.iter().map(User::points).sum()
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (state, set_state) = create_signal(FetchState::<DashboardData>::Loading);

    // Fetch everything on mount
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_dashboard().await;
            if let Err(reason) = &result {
                web_sys::console::error_1(
                    &format!("Failed to fetch dashboard data: {}", reason).into(),
                );
            }
            set_state.set(result.into());
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"🏋️ OctoFit Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Track your progress and stay motivated!"</p>
            </div>

            {move || match state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(reason) => view! { <ErrorCard message=reason /> }.into_view(),
                FetchState::Ready(data) => {
                    // First five activities in server order
                    let recent: Vec<Activity> = data.activities.iter().take(5).cloned().collect();
                    let top: Vec<LeaderboardEntry> =
                        data.leaderboard.iter().take(3).cloned().collect();

                    view! {
                        // Stats grid
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            <StatCard
                                icon="👥"
                                gradient="linear-gradient(135deg, #667eea 0%, #764ba2 100%)"
                                value=data.users.len() as u32
                                label="Active Athletes"
                                href="/users"
                            />
                            <StatCard
                                icon="🏆"
                                gradient="linear-gradient(135deg, #f093fb 0%, #f5576c 100%)"
                                value=data.teams.len() as u32
                                label="Teams Competing"
                                href="/teams"
                            />
                            <StatCard
                                icon="⚡"
                                gradient="linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)"
                                value=data.activities.len() as u32
                                label="Activities Logged"
                                href="/activities"
                            />
                            <StatCard
                                icon="⭐"
                                gradient="linear-gradient(135deg, #ffd700 0%, #ffed4e 100%)"
                                value=total_points(&data.users)
                                label="Total Points"
                                href="/leaderboard"
                            />
                        </div>

                        // Top performers
                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"🌟 Top Performers"</h2>
                            {if top.is_empty() {
                                view! {
                                    <p class="text-gray-400 text-sm">"No leaderboard data yet"</p>
                                }.into_view()
                            } else {
                                view! {
                                    <div class="grid md:grid-cols-3 gap-4">
                                        {top.into_iter().enumerate().map(|(i, entry)| {
                                            view! { <TopPerformer rank=i + 1 entry=entry /> }
                                        }).collect_view()}
                                    </div>
                                }.into_view()
                            }}
                        </section>

                        // Recent activities
                        <RecentActivities activities=recent />
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Compact top-performer card
#[component]
fn TopPerformer(rank: usize, entry: LeaderboardEntry) -> impl IntoView {
    let navigate = use_navigate();
    let initial = entry
        .user_display()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    view! {
        <div
            class="bg-gray-700 rounded-xl p-4 text-center cursor-pointer hover:bg-gray-600 transition-colors"
            on:click=move |_| navigate("/leaderboard", Default::default())
        >
            <div
                class="w-14 h-14 rounded-full mx-auto mb-2 flex items-center justify-center
                       text-xl font-bold text-gray-900"
                style=format!("background: {}", medal_gradient(rank))
            >
                {initial}
            </div>
            <div class="font-semibold">{entry.user_display().to_string()}</div>
            <div class="text-gray-400 text-sm">{entry.team_display().to_string()}</div>
            <div class="font-bold mt-1">{entry.points()} " pts"</div>
        </div>
    }
}

/// List of the most recent activities
#[component]
fn RecentActivities(activities: Vec<Activity>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"🔥 Recent Activities"</h2>
                <button
                    on:click=move |_| navigate("/activities", Default::default())
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors"
                >
                    "View All →"
                </button>
            </div>

            {if activities.is_empty() {
                view! {
                    <p class="text-gray-400 text-sm">"No activities found"</p>
                }.into_view()
            } else {
                activities.into_iter().map(|activity| {
                    view! {
                        <div class="flex items-center space-x-3 py-2 border-b border-gray-700 last:border-0">
                            <div
                                class="w-10 h-10 rounded-lg flex items-center justify-center text-lg flex-shrink-0"
                                style=format!("background: {}", activity_gradient(&activity.activity_type))
                            >
                                {activity_icon(&activity.activity_type)}
                            </div>
                            <div class="flex-1">
                                <div class="font-semibold">{activity.user_display().to_string()}</div>
                                <div class="text-gray-400 text-sm">
                                    {format!(
                                        "{} • {} min • {:.1} km",
                                        activity.activity_type,
                                        activity.duration.unwrap_or(0),
                                        activity.distance.unwrap_or(0.0),
                                    )}
                                </div>
                            </div>
                            <div class="text-gray-400 text-sm">
                                {activity.date.as_deref().map(format_date).unwrap_or_default()}
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_points_treats_missing_as_zero() {
        let users = vec![
            User {
                points: Some(10),
                ..Default::default()
            },
            User {
                points: Some(5),
                ..Default::default()
            },
            User::default(),
        ];
        assert_eq!(total_points(&users), 15);
    }

    #[test]
    fn test_total_points_of_empty_collection() {
        assert_eq!(total_points(&[]), 0);
    }
}
