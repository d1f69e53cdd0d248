//! Public landing page.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-hero">
            <h1>"Organiza tu evento con nosotros"</h1>
            <p>"Bodas, cumpleaños y eventos corporativos con paquetes a tu medida."</p>
            <a class="home-hero__cta" href=routes::CUSTOMIZATION>
                "Personalizar mi evento"
            </a>
        </section>
    }
}
