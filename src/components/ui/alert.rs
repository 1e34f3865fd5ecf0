//! Alert banners for success and error messages. Messages must be safe to render
//! and should never include tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
}

/// Renders a styled alert banner. Errors are announced assertively, successes politely.
#[component]
pub fn Alert(
    kind: AlertKind,
    message: String,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    let (class, role) = match kind {
        AlertKind::Error => (
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200",
            "alert",
        ),
        AlertKind::Success => (
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200",
            "status",
        ),
    };

    view! { <div id=id class=class role=role>{message}</div> }
}
