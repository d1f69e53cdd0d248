//! Admin dashboard. `Administrador` only.

use leptos::prelude::*;

use crate::components::auth::use_auth;
use crate::components::guarded::Guarded;
use crate::routes;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let admin_name = move || {
        auth.session
            .with(|s| s.identity().map(|i| i.name().to_owned()))
            .unwrap_or_default()
    };

    view! {
        <Guarded policy=routes::policy_for(routes::ADMIN_DASHBOARD)>
            <section class="admin-dashboard">
                <h1>"Panel de administración"</h1>
                <p class="admin-dashboard__welcome">{move || format!("Bienvenido, {}", admin_name())}</p>
                <a class="admin-dashboard__link" href=routes::USER_MANAGEMENT>
                    "Gestión de usuarios"
                </a>
            </section>
        </Guarded>
    }
}
