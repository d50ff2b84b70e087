//! Edit User Modal
//!
//! Pre-fills a form from an athlete record and PATCHes the changes back.
//! On failure the modal stays open with an inline error; on success the
//! caller gets the server's updated record (save callback first, then
//! close).

use leptos::*;

use crate::api;
use crate::api::types::{User, UserUpdate};

/// Parse an optional float field; empty input means absent
fn parse_optional_f64(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parse an optional integer field; empty input means absent
fn parse_optional_i64(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Build the PATCH body from raw form input, coercing numerics
#[allow(clippy::too_many_arguments)]
fn build_update(
    name: String,
    email: String,
    team: String,
    weight: &str,
    height: &str,
    age: &str,
    gender: String,
    fitness_goal: String,
    bio: String,
) -> UserUpdate {
    UserUpdate {
        name,
        email,
        team,
        weight: parse_optional_f64(weight),
        height: parse_optional_f64(height),
        age: parse_optional_i64(age),
        gender,
        fitness_goal,
        bio,
    }
}

/// Apply the PATCH outcome to the form.
///
/// Success fires the save callback with the server's record and then
/// close, each exactly once. Failure records the error and re-enables
/// submit; the form stays open and neither callback fires.
fn apply_submit_result(
    result: Result<User, String>,
    on_save: impl Fn(User),
    on_close: impl Fn(),
    set_error: impl Fn(Option<String>),
    set_saving: impl Fn(bool),
) {
    match result {
        Ok(updated) => {
            on_save(updated);
            on_close();
        }
        Err(e) => {
            set_error(Some(e));
            set_saving(false);
        }
    }
}

/// Modal form for editing an athlete
#[component]
pub fn EditUserModal(
    /// The record to edit
    user: User,
    /// Called with the server's updated record on success
    on_save: impl Fn(User) + 'static + Clone,
    /// Called after a successful save, and on cancel/dismiss
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let user_id = user.id.clone();

    let (name, set_name) = create_signal(user.name.clone());
    let (email, set_email) = create_signal(user.email.clone());
    let (team, set_team) = create_signal(user.team.clone().unwrap_or_default());
    let (weight, set_weight) =
        create_signal(user.weight.map(|w| w.to_string()).unwrap_or_default());
    let (height, set_height) =
        create_signal(user.height.map(|h| h.to_string()).unwrap_or_default());
    let (age, set_age) = create_signal(user.age.map(|a| a.to_string()).unwrap_or_default());
    let (gender, set_gender) = create_signal(user.gender.clone().unwrap_or_default());
    let (fitness_goal, set_fitness_goal) =
        create_signal(user.fitness_goal.clone().unwrap_or_default());
    let (bio, set_bio) = create_signal(user.bio.clone().unwrap_or_default());

    let (saving, set_saving) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    // Clone on_close for each place it's used
    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let n = name.get();
        let e = email.get();

        if n.trim().is_empty() || e.trim().is_empty() {
            set_error.set(Some("Name and email are required".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        let update = build_update(
            n,
            e,
            team.get(),
            &weight.get(),
            &height.get(),
            &age.get(),
            gender.get(),
            fitness_goal.get(),
            bio.get(),
        );

        let id = user_id.clone();
        let on_save = on_save.clone();
        let on_close = on_close_for_submit.clone();
        spawn_local(async move {
            apply_submit_result(
                api::update_user(&id, &update).await,
                on_save,
                on_close,
                move |e| set_error.set(e),
                move |s| set_saving.set(s),
            );
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-lg mx-4 max-h-[90vh] overflow-y-auto">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"✏️ Edit Athlete"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Name (required)
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name *"</label>
                        <input
                            type="text"
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Email (required)
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email *"</label>
                        <input
                            type="email"
                            placeholder="Email address"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Team
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Team"</label>
                        <input
                            type="text"
                            placeholder="Team name"
                            prop:value=move || team.get()
                            on:input=move |ev| set_team.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Physical attributes
                    <div class="grid grid-cols-3 gap-3">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Weight (kg)"</label>
                            <input
                                type="number"
                                step="0.1"
                                min="0"
                                placeholder="e.g., 70.5"
                                prop:value=move || weight.get()
                                on:input=move |ev| set_weight.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Height (cm)"</label>
                            <input
                                type="number"
                                step="0.1"
                                min="0"
                                placeholder="e.g., 175"
                                prop:value=move || height.get()
                                on:input=move |ev| set_height.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Age"</label>
                            <input
                                type="number"
                                min="0"
                                placeholder="e.g., 25"
                                prop:value=move || age.get()
                                on:input=move |ev| set_age.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    // Gender
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Gender"</label>
                        <select
                            on:change=move |ev| set_gender.set(event_target_value(&ev))
                            prop:value=move || gender.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="">"Select"</option>
                            <option value="M">"Male"</option>
                            <option value="F">"Female"</option>
                            <option value="O">"Other"</option>
                        </select>
                    </div>

                    // Fitness goal
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Fitness Goal"</label>
                        <input
                            type="text"
                            placeholder="e.g., Lose weight, Build muscle, Improve endurance"
                            prop:value=move || fitness_goal.get()
                            on:input=move |ev| set_fitness_goal.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Bio
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"About"</label>
                        <textarea
                            rows="4"
                            placeholder="Achievements, hobbies, anything worth sharing"
                            prop:value=move || bio.get()
                            on:input=move |ev| set_bio.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Inline error, modal stays open
                    {move || error.get().map(|msg| view! {
                        <div class="bg-red-900/30 border border-red-800 rounded-lg px-4 py-3 text-red-400 text-sm">
                            "⚠️ " {msg}
                        </div>
                    })}

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            disabled=move || saving.get()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || saving.get()
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_numeric_input_is_absent() {
        assert_eq!(parse_optional_f64(""), None);
        assert_eq!(parse_optional_f64("   "), None);
        assert_eq!(parse_optional_i64(""), None);
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(parse_optional_f64("70.5"), Some(70.5));
        assert_eq!(parse_optional_f64("175"), Some(175.0));
        assert_eq!(parse_optional_i64("25"), Some(25));
        assert_eq!(parse_optional_f64("heavy"), None);
        assert_eq!(parse_optional_i64("25.5"), None);
    }

    #[test]
    fn test_successful_save_fires_save_then_close_exactly_once() {
        use std::cell::RefCell;

        let calls = RefCell::new(Vec::new());
        let updated = User {
            name: "Alice".to_string(),
            ..Default::default()
        };

        apply_submit_result(
            Ok(updated),
            |u| calls.borrow_mut().push(format!("save:{}", u.name)),
            || calls.borrow_mut().push("close".to_string()),
            |_| calls.borrow_mut().push("error".to_string()),
            |_| calls.borrow_mut().push("saving".to_string()),
        );

        // Save first, then close; no error or saving writes
        assert_eq!(*calls.borrow(), vec!["save:Alice", "close"]);
    }

    #[test]
    fn test_failed_save_keeps_form_open_and_never_fires_callbacks() {
        use std::cell::{Cell, RefCell};

        let save_calls = Cell::new(0);
        let close_calls = Cell::new(0);
        let error = RefCell::new(None::<String>);
        let saving = Cell::new(true);

        apply_submit_result(
            Err("HTTP error: status 400".to_string()),
            |_| save_calls.set(save_calls.get() + 1),
            || close_calls.set(close_calls.get() + 1),
            |e| *error.borrow_mut() = e,
            |s| saving.set(s),
        );

        assert_eq!(save_calls.get(), 0);
        assert_eq!(close_calls.get(), 0);
        assert!(!saving.get());
        let message = error.borrow().clone().unwrap();
        assert!(!message.is_empty());
        assert_eq!(message, "HTTP error: status 400");
    }

    #[test]
    fn test_build_update_coerces_fields() {
        let update = build_update(
            "Alice".into(),
            "alice@example.com".into(),
            "Blue Team".into(),
            "70.5",
            "",
            "25",
            "F".into(),
            "Build muscle".into(),
            String::new(),
        );
        assert_eq!(update.weight, Some(70.5));
        assert_eq!(update.height, None);
        assert_eq!(update.age, Some(25));

        let body = serde_json::to_value(&update).unwrap();
        assert!(body["height"].is_null());
        assert_eq!(body["name"], "Alice");
    }
}
