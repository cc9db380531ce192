mod dashboard;
mod forgot_password;
mod home;
mod login;
mod not_found;
pub(crate) mod paths;
mod register;

pub(crate) use dashboard::{DashboardPage, DashboardTab};
pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;

use crate::features::auth::{RedirectIfAuthed, RequireAuth};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route
                path=path!("/login")
                view=|| {
                    view! {
                        <RedirectIfAuthed>
                            <LoginPage />
                        </RedirectIfAuthed>
                    }
                }
            />
            <Route
                path=path!("/register")
                view=|| {
                    view! {
                        <RedirectIfAuthed>
                            <RegisterPage />
                        </RedirectIfAuthed>
                    }
                }
            />
            <Route
                path=path!("/forgot-password")
                view=|| {
                    view! {
                        <RedirectIfAuthed>
                            <ForgotPasswordPage />
                        </RedirectIfAuthed>
                    }
                }
            />
            <Route
                path=path!("/dashboard")
                view=|| {
                    view! {
                        <RequireAuth>
                            <DashboardPage />
                        </RequireAuth>
                    }
                }
            />
            <Route
                path=path!("/profile")
                view=|| {
                    view! {
                        <RequireAuth>
                            <DashboardPage initial_tab=DashboardTab::Profile />
                        </RequireAuth>
                    }
                }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
