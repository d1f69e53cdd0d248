//! Route guard component.
//!
//! Rendering follows the session signal through the pure policy; the
//! side-effecting `RouteGuard` is mounted from an effect so it only exists in
//! the browser and never navigates during a server render. Unmounting the
//! page drops the guard, which cancels any pending decision.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::auth::use_auth;
use super::toast::ToastQueue;
use crate::guard::{Destinations, GuardPolicy, GuardView, Navigator, RouteGuard};

/// `Navigator` backed by the router. Redirects replace the history entry so
/// "back" does not bounce into the guard again.
struct RouterNavigator<F> {
    navigate: F,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Neutral placeholder while the session is unresolved or a redirect is pending.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="page-loading" aria-busy="true">
            <span class="page-loading__spinner"></span>
            "Cargando…"
        </div>
    }
}

/// Render `children` only when `policy` admits the current session.
#[component]
pub fn Guarded(policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let toasts = expect_context::<ToastQueue>();
    let navigate = use_navigate();
    let guard = StoredValue::new_local(None::<RouteGuard>);

    let mount_policy = policy.clone();
    Effect::new(move || {
        if guard.with_value(Option::is_some) {
            return;
        }
        let navigator = Rc::new(RouterNavigator { navigate: navigate.clone() });
        let mounted = RouteGuard::mount(
            &auth.provider().reader(),
            mount_policy.clone(),
            Destinations::from_config(&auth.config()),
            navigator,
            Rc::new(toasts),
        );
        guard.set_value(Some(mounted));
    });
    on_cleanup(move || guard.update_value(|g| *g = None));

    let session = auth.session;
    let admitted = move || session.with(|s| policy.evaluate(s).view()) == GuardView::Content;

    view! {
        <Show when=admitted fallback=|| view! { <LoadingPlaceholder/> }>
            {children()}
        </Show>
    }
}
