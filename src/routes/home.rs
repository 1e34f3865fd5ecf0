use crate::app_lib::build_info;
use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const CARD: &str = "block rounded-lg border border-neutral-200 bg-white p-5 hover:bg-gray-50 dark:border-neutral-700 dark:bg-neutral-800 dark:hover:bg-neutral-700";

#[component]
pub fn HomePage() -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Email Verification"
                </h1>
                <div class="mt-6 grid gap-4">
                    <A href=paths::SEND {..} class=CARD>
                        <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                            "Send Verification Email"
                        </h2>
                        <p class="mt-1 text-sm text-gray-600 dark:text-gray-300">
                            "Request a verification link for your address."
                        </p>
                    </A>
                    <A href=paths::VERIFY {..} class=CARD>
                        <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                            "Verify Email"
                        </h2>
                        <p class="mt-1 text-sm text-gray-600 dark:text-gray-300">
                            "Confirm the link you received by email."
                        </p>
                    </A>
                </div>
                <p class="mt-8 text-xs text-gray-400">
                    "Build " <code>{commit}</code>
                </p>
            </div>
        </AppShell>
    }
}
