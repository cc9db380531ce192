use crate::components::{Navbar, PageTransition, ToastProvider, Toaster};
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <ToastProvider>
                <Router>
                    <div class="flex min-h-screen flex-col bg-white">
                        <Navbar />
                        <main class="flex-1">
                            <PageTransition>
                                <AppRoutes />
                            </PageTransition>
                        </main>
                    </div>
                    <Toaster />
                </Router>
            </ToastProvider>
        </AuthProvider>
    }
}
