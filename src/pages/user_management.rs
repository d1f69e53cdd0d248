//! User management. `Organizador` only.

use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::routes;

#[component]
pub fn UserManagementPage() -> impl IntoView {
    view! {
        <Guarded policy=routes::policy_for(routes::USER_MANAGEMENT)>
            <section class="user-management">
                <h1>"Gestión de usuarios"</h1>
                <p>"Consulta y administra las cuentas de clientes y organizadores."</p>
            </section>
        </Guarded>
    }
}
