//! Event customization. Any logged-in visitor; anonymous visitors are told
//! why they are being sent to the login page.

use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::routes;

#[component]
pub fn CustomizationPage() -> impl IntoView {
    view! {
        <Guarded policy=routes::policy_for(routes::CUSTOMIZATION)>
            <section class="customization">
                <h1>"Personaliza tu evento"</h1>
                <p>"Elige el paquete, la decoración y los servicios adicionales."</p>
            </section>
        </Guarded>
    }
}
