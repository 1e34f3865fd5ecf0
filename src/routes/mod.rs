mod home;
mod not_found;
mod send_email;
mod verify_email;

pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use send_email::SendEmailPage;
pub(crate) use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

pub(crate) mod paths {
    pub const HOME: &str = crate::features::verification::HOME_PATH;
    pub const SEND: &str = "/send";
    pub const VERIFY: &str = "/verify";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/send") view=SendEmailPage />
            <Route path=path!("/verify") view=VerifyEmailPage />
        </Routes>
    }
}
