//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth::ProvideAuth;
use crate::components::session_menu::SessionMenu;
use crate::components::toast::{ToastQueue, Toaster};
use crate::pages::{
    admin_dashboard::AdminDashboardPage, customization::CustomizationPage, home::HomePage, login::LoginPage,
    user_management::UserManagementPage,
};
use crate::routes;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue and the session, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ToastQueue::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Eventos"/>

        <ProvideAuth>
            <Router>
                <header class="site-header">
                    <a href=routes::HOME class="site-header__brand">"Eventos"</a>
                    <SessionMenu/>
                </header>
                <Toaster/>
                <main>
                    <Routes fallback=|| "Página no encontrada.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                        <Route path=(StaticSegment("admin"), StaticSegment("usuarios")) view=UserManagementPage/>
                        <Route path=StaticSegment("personalizar") view=CustomizationPage/>
                    </Routes>
                </main>
            </Router>
        </ProvideAuth>
    }
}
