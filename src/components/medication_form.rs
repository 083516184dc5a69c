//! Medication Form Component
//!
//! The registration form: name, schedule mode, fixed times or interval, and
//! submission.

use leptos::*;

use crate::api::MedicationApi;
use crate::form::{FormAction, FormState, ScheduleMode};
use crate::state::global::GlobalState;
use crate::state::medication::use_medication;

/// How a pending time entry is confirmed into the schedule.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TimeConfirm {
    /// Explicit "Add" button next to the input
    Button,
    /// Confirmed when the input loses focus
    Blur,
}

/// Medication registration form
#[component]
pub fn MedicationForm(
    /// Confirm policy for time entries
    #[prop(default = TimeConfirm::Button)]
    confirm: TimeConfirm,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let api = use_context::<MedicationApi>().expect("MedicationApi not found");

    let form = create_rw_signal(FormState::default());
    let submission = use_medication();

    let mode = move || form.with(|f| f.mode);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        form.update(|f| f.apply(FormAction::SubmitStart));
        let record = form.with(|f| f.payload());

        let state = state.clone();
        let api = api.clone();
        spawn_local(async move {
            match submission.create(&api, &record).await {
                Ok(response) => {
                    state.show_success(&response.message);
                    form.update(|f| f.apply(FormAction::SubmitSuccess));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Medication submission failed: {}", e).into(),
                    );
                    form.update(|f| f.apply(FormAction::SubmitFailure));
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            // Name
            <div>
                <label for="name" class="block text-sm text-gray-400 mb-2">
                    "Medication name"
                </label>
                <input
                    type="text"
                    id="name"
                    required
                    placeholder="e.g. Aspirin"
                    prop:value=move || form.with(|f| f.record.name.clone())
                    on:input=move |ev| {
                        form.update(|f| f.apply(FormAction::SetName(event_target_value(&ev))));
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Schedule mode toggle
            <div class="flex space-x-2">
                <ModeButton label="Fixed times" form=form target=ScheduleMode::Times />
                <ModeButton label="Every N hours" form=form target=ScheduleMode::Interval />
            </div>

            {move || match mode() {
                ScheduleMode::Times => {
                    view! { <TimeSchedule form=form confirm=confirm /> }.into_view()
                }
                ScheduleMode::Interval => {
                    view! { <IntervalSchedule form=form /> }.into_view()
                }
            }}

            // Submit button
            <button
                type="submit"
                disabled=move || submission.loading.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submission.loading.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Registering..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Register"</span>
                    }.into_view()
                }}
            </button>

            // Inline error from the last attempt
            {move || {
                submission.error.get().map(|msg| view! {
                    <p class="text-red-400 text-sm">{msg}</p>
                })
            }}
        </form>
    }
}

#[component]
fn ModeButton(
    label: &'static str,
    form: RwSignal<FormState>,
    target: ScheduleMode,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| form.update(|f| f.apply(FormAction::SetMode(target)))
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if form.with(|f| f.mode) == target {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Fixed-times editor: pending time entry plus the confirmed chips.
#[component]
fn TimeSchedule(form: RwSignal<FormState>, confirm: TimeConfirm) -> impl IntoView {
    let add_time = move || form.update(|f| f.apply(FormAction::AddTime));

    view! {
        <div>
            <label for="schedule-time" class="block text-sm text-gray-400 mb-2">
                "Dose times"
            </label>
            <div class="flex space-x-2">
                <input
                    type="time"
                    id="schedule-time"
                    prop:value=move || form.with(|f| f.time_input.clone())
                    on:input=move |ev| {
                        form.update(|f| {
                            f.apply(FormAction::SetTimeInput(event_target_value(&ev)))
                        });
                    }
                    on:blur=move |_| {
                        if confirm == TimeConfirm::Blur {
                            add_time();
                        }
                    }
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                {(confirm == TimeConfirm::Button).then(|| view! {
                    <button
                        type="button"
                        on:click=move |_| add_time()
                        class="px-4 py-3 bg-gray-600 hover:bg-gray-500 rounded-lg
                               font-medium transition-colors"
                    >
                        "Add"
                    </button>
                })}
            </div>

            // Confirmed times as removable chips
            <div class="mt-2 flex flex-wrap gap-2">
                {move || {
                    form.with(|f| f.record.schedule_time.clone())
                        .into_iter()
                        .map(|time| {
                            let removed = time.clone();
                            view! {
                                <span class="bg-gray-700 px-3 py-1 rounded-full text-sm
                                             flex items-center space-x-2">
                                    <span>{time}</span>
                                    <button
                                        type="button"
                                        on:click=move |_| {
                                            form.update(|f| {
                                                f.apply(FormAction::RemoveTime(removed.clone()))
                                            });
                                        }
                                        class="text-gray-400 hover:text-white"
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Interval editor: hours between doses.
#[component]
fn IntervalSchedule(form: RwSignal<FormState>) -> impl IntoView {
    view! {
        <div>
            <label for="interval-hours" class="block text-sm text-gray-400 mb-2">
                "Hours between doses"
            </label>
            <input
                type="number"
                id="interval-hours"
                min="1"
                max="24"
                placeholder="e.g. 8"
                prop:value=move || {
                    form.with(|f| match f.record.interval_hours {
                        0 => String::new(),
                        hours => hours.to_string(),
                    })
                }
                on:input=move |ev| {
                    // Cleared or unparseable input falls back to the 0 sentinel
                    let hours = event_target_value(&ev).parse().unwrap_or(0);
                    form.update(|f| f.apply(FormAction::SetInterval(hours)));
                }
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
