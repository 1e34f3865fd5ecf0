//! `/send`: request a verification link for an email address. The page always
//! reports the same neutral message on success so it cannot be used to probe
//! which addresses are registered.

use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::verification::{HttpVerificationApi, RequestState, SendRequestController};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use std::rc::Rc;

type Controller = SendRequestController<HttpVerificationApi, RwSignal<RequestState>>;

const ERROR_ID: &str = "email-error";

#[component]
pub fn SendEmailPage() -> impl IntoView {
    let state = RwSignal::new(RequestState::default());
    let controller: StoredValue<Rc<Controller>, LocalStorage> = StoredValue::new_local(Rc::new(
        SendRequestController::new(HttpVerificationApi::from_config(), state),
    ));

    on_cleanup(move || {
        controller.try_with_value(|controller| controller.teardown());
    });

    let submit = move |email: String| {
        if let Some(controller) = controller.try_get_value() {
            spawn_local(async move {
                controller.submit(&email).await;
            });
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        submit(state.with_untracked(|state| state.input_value.clone()));
    };

    let on_retry = Callback::new(move |_| {
        if let Some(controller) = controller.try_get_value() {
            spawn_local(async move {
                controller.retry().await;
            });
        }
    });

    let pending = Signal::derive(move || state.with(RequestState::is_pending));

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Send Verification Email"
                </h1>
                <form
                    class="mt-6"
                    aria-label="Send verification email form"
                    novalidate
                    on:submit=on_submit
                >
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="email-input"
                    >
                        "Email address"
                    </label>
                    <div class="flex flex-col gap-3 sm:flex-row">
                        <input
                            id="email-input"
                            type="email"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                            autocomplete="email"
                            placeholder="Enter your email"
                            required
                            aria-required="true"
                            aria-describedby=move || {
                                state.with(|state| state.error_message.is_some().then_some(ERROR_ID))
                            }
                            prop:value=move || state.with(|state| state.input_value.clone())
                            on:input=move |event| {
                                if let Some(controller) = controller.try_get_value() {
                                    controller.set_input(event_target_value(&event));
                                }
                            }
                        />
                        <Button button_type="submit" disabled=pending>
                            {move || {
                                pending
                                    .get()
                                    .then(|| view! {
                                        <span
                                            class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-blue-200 border-t-white"
                                            aria-hidden="true"
                                        ></span>
                                    })
                            }}
                            {move || if pending.get() { "Sending..." } else { "Send" }}
                        </Button>
                    </div>
                </form>
                {move || {
                    state
                        .with(|state| state.result_message.clone())
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Success message=message />
                                </div>
                            }
                        })
                }}
                {move || {
                    let (message, can_retry) = state
                        .with(|state| (state.error_message.clone(), state.can_retry()));
                    message
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message id=ERROR_ID />
                                    {can_retry
                                        .then(|| {
                                            view! {
                                                <div class="mt-2">
                                                    <Button on_click=on_retry disabled=pending>
                                                        "Retry"
                                                    </Button>
                                                </div>
                                            }
                                        })}
                                </div>
                            }
                        })
                }}
            </div>
        </AppShell>
    }
}
