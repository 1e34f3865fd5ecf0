//! `/verify`: confirm the token carried in the page URL. Verification starts as
//! soon as the page mounts; on success the user is sent home after a short delay
//! unless they leave first.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::verification::{
    HttpVerificationApi, RequestState, VerifyTokenController,
    reactive::current_location,
    redirect::GlooScheduler,
};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};
use std::rc::Rc;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let navigate = use_navigate();
    let state = RwSignal::new(RequestState::default());
    let controller = StoredValue::new_local(Rc::new(VerifyTokenController::new(
        HttpVerificationApi::from_config(),
        state,
        current_location(),
        GlooScheduler,
        move |path: &str| navigate(path, NavigateOptions::default()),
    )));

    on_cleanup(move || {
        controller.try_with_value(|controller| controller.teardown());
    });

    if let Some(controller) = controller.try_get_value() {
        spawn_local(async move {
            controller.verify().await;
        });
    }

    let on_retry = Callback::new(move |_| {
        if let Some(controller) = controller.try_get_value() {
            spawn_local(async move {
                controller.retry().await;
            });
        }
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Verify Email"
                </h1>
                <div class="mt-6">
                    {move || {
                        let snapshot = state.get();
                        if snapshot.is_busy() {
                            return view! { <Spinner label="Verifying your email..." /> }.into_any();
                        }
                        if let Some(message) = snapshot.result_message {
                            return view! {
                                <Alert kind=AlertKind::Success message=message />
                                <div class="mt-4 flex items-center gap-3 text-sm text-gray-600 dark:text-gray-300">
                                    <A href=paths::HOME {..} class="font-medium text-blue-700 hover:underline dark:text-blue-400">
                                        "Go Home"
                                    </A>
                                    <span>"You will be redirected automatically."</span>
                                </div>
                            }
                                .into_any();
                        }
                        let can_retry = snapshot.can_retry();
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message=snapshot.error_message.unwrap_or_default()
                            />
                            {can_retry
                                .then(|| {
                                    view! {
                                        <div class="mt-4">
                                            <Button on_click=on_retry>"Retry"</Button>
                                        </div>
                                    }
                                })}
                        }
                            .into_any()
                    }}
                </div>
            </div>
        </AppShell>
    }
}
