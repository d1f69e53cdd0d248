//! The session store: sole owner and mutator of the client session.
//!
//! DESIGN
//! ======
//! State is `Rc<RefCell<_>>` because the client runs on one event loop. A
//! borrow is never held across an await point or across a subscriber
//! callback. Commits push the new snapshot onto a queue; whoever is not
//! already delivering drains it. A transition committed from inside a
//! callback is therefore delivered after the current one, to every
//! subscriber, in commit order.
//!
//! TRADE-OFFS
//! ==========
//! Subscribers are snapshotted per delivery, so a subscriber dropped while a
//! delivery is in progress still sees that one snapshot. Guards keep their own
//! mounted flag to suppress side effects in that window.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::backend::{AuthBackend, TokenStore};
use super::model::{Credentials, Role, Session, SessionStatus};
use crate::error::AuthError;

type Callback = Rc<dyn Fn(&Session)>;

struct Shared {
    session: Session,
    restore_started: bool,
    subscribers: Vec<(u64, Callback)>,
    next_subscriber_id: u64,
    pending: VecDeque<Session>,
    delivering: bool,
}

/// Cloneable handle to the one session. Clones share state.
#[derive(Clone)]
pub struct SessionStore {
    shared: Rc<RefCell<Shared>>,
    backend: Rc<dyn AuthBackend>,
    tokens: Rc<dyn TokenStore>,
}

enum RestoreOutcome {
    Restored(Session),
    NoToken,
    Rejected,
    Failed,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn AuthBackend>, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                session: Session::Initializing,
                restore_started: false,
                subscribers: Vec::new(),
                next_subscriber_id: 0,
                pending: VecDeque::new(),
                delivering: false,
            })),
            backend,
            tokens,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.shared.borrow().session.clone()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.shared.borrow().session.status()
    }

    /// Read-only view for guards and pages.
    #[must_use]
    pub fn reader(&self) -> SessionReader {
        SessionReader { store: self.clone() }
    }

    /// Recover a persisted session and leave `Initializing`.
    ///
    /// Runs at most once per store. Never fails: a missing or rejected token
    /// and a backend error all end in `Unauthenticated`. If login or logout
    /// already settled the session while the backend call was in flight, the
    /// restore result is dropped.
    pub async fn restore(&self) -> SessionStatus {
        {
            let mut shared = self.shared.borrow_mut();
            if shared.restore_started || shared.session.is_resolved() {
                log::debug!("session restore skipped: already started or resolved");
                return shared.session.status();
            }
            shared.restore_started = true;
        }

        let outcome = match self.tokens.load() {
            None => RestoreOutcome::NoToken,
            Some(token) => match self.backend.restore(&token).await {
                Ok(Some(grant)) => RestoreOutcome::Restored(grant.into_session()),
                Ok(None) => RestoreOutcome::Rejected,
                Err(e) => {
                    log::warn!("session restore failed, continuing logged out: {e}");
                    RestoreOutcome::Failed
                }
            },
        };

        if self.status() != SessionStatus::Initializing {
            log::debug!("session settled during restore; discarding restore result");
            return self.status();
        }

        let next = match outcome {
            RestoreOutcome::Restored(session) => {
                if let Some(role) = session.role() {
                    log::info!("session restored role={role}");
                }
                session
            }
            RestoreOutcome::NoToken => {
                log::debug!("no persisted session token");
                Session::Unauthenticated
            }
            RestoreOutcome::Rejected => {
                log::info!("persisted session token rejected; clearing it");
                self.tokens.clear();
                Session::Unauthenticated
            }
            RestoreOutcome::Failed => Session::Unauthenticated,
        };
        self.commit(next);
        self.status()
    }

    /// Authenticate with the backend and return the granted role.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`AuthError`]; the session is left untouched and
    /// nothing navigates on its own.
    pub async fn login(&self, credentials: &Credentials) -> Result<Role, AuthError> {
        match self.backend.login(credentials).await {
            Ok(grant) => {
                self.tokens.save(grant.identity.token());
                let role = grant.role.clone();
                log::info!("login succeeded role={role}");
                self.commit(grant.into_session());
                Ok(role)
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                Err(e)
            }
        }
    }

    /// End the session. Returns `false` (and notifies nobody) when already
    /// logged out.
    pub fn logout(&self) -> bool {
        let ended = self.end_session();
        if ended {
            log::info!("logged out");
        }
        ended
    }

    /// End the session because the backend no longer honours it.
    ///
    /// Entry point for data calls that get a 401 on an authenticated
    /// request. The session layer never calls it itself: the auth endpoints
    /// it talks to only reject tokens during [`SessionStore::restore`],
    /// which clears them directly.
    pub fn expire(&self) -> bool {
        let ended = self.end_session();
        if ended {
            log::warn!("session expired");
        }
        ended
    }

    /// Register `callback` for every future transition. Dropping the returned
    /// handle unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&Session) + 'static) -> Subscription {
        let callback: Callback = Rc::new(callback);
        let mut shared = self.shared.borrow_mut();
        let id = shared.next_subscriber_id;
        shared.next_subscriber_id += 1;
        shared.subscribers.push((id, callback));
        Subscription { id, shared: Rc::downgrade(&self.shared) }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.borrow().subscribers.len()
    }

    fn end_session(&self) -> bool {
        if matches!(self.shared.borrow().session, Session::Unauthenticated) {
            return false;
        }
        self.tokens.clear();
        self.commit(Session::Unauthenticated);
        true
    }

    fn commit(&self, next: Session) {
        {
            let mut shared = self.shared.borrow_mut();
            shared.session = next.clone();
            shared.pending.push_back(next);
            if shared.delivering {
                return;
            }
            shared.delivering = true;
        }
        self.deliver_pending();
    }

    fn deliver_pending(&self) {
        loop {
            let (session, subscribers) = {
                let mut shared = self.shared.borrow_mut();
                let Some(session) = shared.pending.pop_front() else {
                    shared.delivering = false;
                    return;
                };
                let subscribers: Vec<Callback> = shared.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect();
                (session, subscribers)
            };
            for callback in subscribers {
                callback(&session);
            }
        }
    }
}

/// Read-only access to the session: snapshot and subscribe, nothing else.
#[derive(Clone)]
pub struct SessionReader {
    store: SessionStore,
}

impl SessionReader {
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.store.snapshot()
    }

    pub fn subscribe(&self, callback: impl Fn(&Session) + 'static) -> Subscription {
        self.store.subscribe(callback)
    }
}

/// Handle returned by `subscribe`. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    shared: Weak<RefCell<Shared>>,
}

impl Subscription {
    /// Unsubscribe explicitly.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        let removed = match shared.try_borrow_mut() {
            Ok(mut shared) => {
                let position = shared.subscribers.iter().position(|(id, _)| *id == self.id);
                position.map(|index| shared.subscribers.remove(index))
            }
            Err(_) => {
                log::warn!("subscription {} dropped while session store was borrowed", self.id);
                None
            }
        };
        // Drop the callback outside the borrow; it may own other subscriptions.
        drop(removed);
    }
}
