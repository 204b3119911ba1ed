//! Sequential driver: dispatch an action, perform its effects, feed the
//! completions back, until the store is idle.

use crate::capabilities::Notifier;
use crate::effects::execute;
use crate::store::{Action, DashboardStore, Effect};
use std::collections::VecDeque;
use wqd_api::Backend;

pub struct Dashboard<B, N> {
    store: DashboardStore,
    backend: B,
    notifier: N,
}

impl<B: Backend, N: Notifier> Dashboard<B, N> {
    pub fn new(backend: B, notifier: N) -> Self {
        Self {
            store: DashboardStore::new(),
            backend,
            notifier,
        }
    }

    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply `action` and run every resulting effect to completion.
    pub async fn run(&mut self, action: Action) {
        let mut queue: VecDeque<Effect> = self.store.dispatch(action).into();
        while let Some(effect) = queue.pop_front() {
            if let Effect::Notify(message) = &effect {
                self.notifier.notify(message);
                continue;
            }
            if let Some(done) = execute(&self.backend, effect).await {
                queue.extend(self.store.dispatch(done));
            }
        }
    }
}
