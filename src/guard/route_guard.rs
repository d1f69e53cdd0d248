//! Stateful per-page guard.
//!
//! A guard is mounted with a page and lives until the page unmounts. It
//! re-evaluates on every session transition because the boot-time restore
//! usually resolves after the page is already on screen. Redirects fire once
//! per denial: repeated transitions that keep denying for the same reason do
//! not navigate or notify again, and a `Render` outcome re-arms the latch.
//! After unmount the guard is inert.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use std::cell::Cell;
use std::rc::Rc;

use super::policy::{Denial, Destinations, GuardPolicy, GuardView, Outcome};
use super::{Navigator, NotificationSink};
use crate::session::{Session, SessionReader, Subscription};

struct GuardState {
    policy: GuardPolicy,
    destinations: Destinations,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn NotificationSink>,
    mounted: Cell<bool>,
    fired: Cell<Option<Denial>>,
    view: Cell<GuardView>,
}

impl GuardState {
    fn observe(&self, session: &Session) {
        if !self.mounted.get() {
            return;
        }
        let outcome = self.policy.evaluate(session);
        self.view.set(outcome.view());
        match outcome {
            Outcome::Wait => {}
            Outcome::Render => self.fired.set(None),
            Outcome::Redirect(denial) => {
                if self.fired.replace(Some(denial)) == Some(denial) {
                    return;
                }
                let target = self.destinations.for_denial(denial);
                log::debug!("route guard denied ({denial:?}); redirecting to {target}");
                if let Some(notice) = &self.policy.notice {
                    self.notifier.notify(&notice.message, notice.severity);
                }
                self.navigator.navigate(target);
            }
        }
    }
}

pub struct RouteGuard {
    state: Rc<GuardState>,
    subscription: Option<Subscription>,
}

impl RouteGuard {
    /// Subscribe to `reader` and evaluate the current session immediately, so
    /// a guard mounted after the restore resolved still decides right away.
    pub fn mount(
        reader: &SessionReader,
        policy: GuardPolicy,
        destinations: Destinations,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn NotificationSink>,
    ) -> Self {
        let state = Rc::new(GuardState {
            policy,
            destinations,
            navigator,
            notifier,
            mounted: Cell::new(true),
            fired: Cell::new(None),
            view: Cell::new(GuardView::Placeholder),
        });
        let observer = Rc::clone(&state);
        let subscription = reader.subscribe(move |session: &Session| observer.observe(session));
        state.observe(&reader.snapshot());
        Self { state, subscription: Some(subscription) }
    }

    #[must_use]
    pub fn view(&self) -> GuardView {
        self.state.view.get()
    }

    /// Stop observing. Equivalent to dropping the guard.
    pub fn unmount(self) {}
}

impl Drop for RouteGuard {
    fn drop(&mut self) {
        self.state.mounted.set(false);
        self.subscription.take();
    }
}
