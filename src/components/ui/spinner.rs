use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2" role="status" aria-live="polite">
            <div
                class="inline-block h-5 w-5 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                aria-hidden="true"
            ></div>
            <span class="text-sm text-gray-600 dark:text-gray-300">
                {label.unwrap_or("Loading...")}
            </span>
        </div>
    }
}
