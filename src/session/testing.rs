//! Test doubles for the session seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;

use super::backend::{AuthBackend, Grant, MemoryTokenStore};
use super::model::{Credentials, Identity, Role, Session, SessionStatus};
use super::store::{SessionReader, SessionStore, Subscription};
use crate::error::AuthError;

pub(crate) fn grant(role: &str, token: &str) -> Grant {
    Grant {
        role: Role::from(role),
        identity: Identity::new(
            "u1".to_owned(),
            "Ana".to_owned(),
            "ana@example.com".to_owned(),
            token.to_owned(),
        ),
    }
}

/// Backend with canned answers. `restore` can be held open with a gate.
pub(crate) struct MockBackend {
    pub login_result: RefCell<Result<Grant, AuthError>>,
    pub restore_result: RefCell<Result<Option<Grant>, AuthError>>,
    pub login_calls: Cell<usize>,
    pub restore_calls: Cell<usize>,
    pub restored_tokens: RefCell<Vec<String>>,
    restore_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            login_result: RefCell::new(Err(AuthError::InvalidCredentials)),
            restore_result: RefCell::new(Ok(None)),
            login_calls: Cell::new(0),
            restore_calls: Cell::new(0),
            restored_tokens: RefCell::new(Vec::new()),
            restore_gate: RefCell::new(None),
        }
    }

    pub fn accepting_login(self, role: &str, token: &str) -> Self {
        *self.login_result.borrow_mut() = Ok(grant(role, token));
        self
    }

    pub fn restoring(self, result: Result<Option<Grant>, AuthError>) -> Self {
        *self.restore_result.borrow_mut() = result;
        self
    }

    /// Hold `restore` open until the returned sender fires (or is dropped).
    pub fn gate_restore(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.restore_gate.borrow_mut() = Some(rx);
        tx
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for MockBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<Grant, AuthError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login_result.borrow().clone()
    }

    async fn restore(&self, token: &str) -> Result<Option<Grant>, AuthError> {
        self.restore_calls.set(self.restore_calls.get() + 1);
        self.restored_tokens.borrow_mut().push(token.to_owned());
        let gate = self.restore_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.restore_result.borrow().clone()
    }
}

pub(crate) fn store_with(backend: MockBackend, tokens: MemoryTokenStore) -> (SessionStore, Rc<MockBackend>, Rc<MemoryTokenStore>) {
    let backend = Rc::new(backend);
    let tokens = Rc::new(tokens);
    let store = SessionStore::new(backend.clone(), tokens.clone());
    (store, backend, tokens)
}

/// Record every delivered status.
pub(crate) fn record(reader: &SessionReader) -> (Rc<RefCell<Vec<SessionStatus>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let subscription = reader.subscribe(move |session: &Session| sink.borrow_mut().push(session.status()));
    (seen, subscription)
}
