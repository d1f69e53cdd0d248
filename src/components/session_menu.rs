//! Header widget showing who is logged in, with a logout button.

#[cfg(test)]
#[path = "session_menu_test.rs"]
mod session_menu_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::auth::use_auth;
use crate::routes;
use crate::session::Session;

fn greeting(session: &Session) -> Option<String> {
    let identity = session.identity()?;
    let role = session.role()?;
    Some(format!("{} · {role}", identity.name()))
}

#[component]
pub fn SessionMenu() -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;

    let on_logout = move |_| {
        let provider = auth.provider();
        let token = provider.snapshot().identity().map(|i| i.token().to_owned());
        provider.logout();

        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = token {
                let config = auth.config();
                leptos::task::spawn_local(async move {
                    crate::net::api::logout(&config, &token).await;
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    view! {
        <nav class="session-menu">
            {move || match session.with(greeting) {
                Some(text) => {
                    view! {
                        <span class="session-menu__user">{text}</span>
                        <button class="session-menu__logout" on:click=on_logout>
                            "Cerrar sesión"
                        </button>
                    }
                        .into_any()
                }
                None if session.with(Session::is_resolved) => {
                    view! { <a class="session-menu__login" href=routes::LOGIN>"Iniciar sesión"</a> }.into_any()
                }
                None => ().into_any(),
            }}
        </nav>
    }
}
