//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup so routes can focus on content.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href=paths::HOME {..} class="font-semibold whitespace-nowrap dark:text-white">
                        "Email Verification"
                    </A>
                    <nav>
                        <ul class="font-medium flex flex-row space-x-8 rtl:space-x-reverse">
                            <li>
                                <A href=paths::SEND {..} class=NAV_LINK>
                                    "Send Verification Email"
                                </A>
                            </li>
                            <li>
                                <A href=paths::VERIFY {..} class=NAV_LINK>
                                    "Verify Email"
                                </A>
                            </li>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
