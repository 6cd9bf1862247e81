//! Exhaustion listener registry
//!
//! Аналог multicast delegate: список (id → callback), вызывается
//! синхронно и строго в порядке регистрации.

use std::fmt;

use super::events::ExhaustionEvent;

/// Callback подписчика. Не должен блокировать (вызывается inline из movement).
pub type ExhaustionCallback = Box<dyn FnMut(&ExhaustionEvent) + Send + Sync>;

/// Идентификатор подписки (для unsubscribe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct ExhaustionListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, ExhaustionCallback)>,
}

impl ExhaustionListeners {
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&ExhaustionEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// false если такой подписки нет (уже снята)
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn notify(&mut self, event: &ExhaustionEvent) {
        for (_, callback) in self.listeners.iter_mut() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ExhaustionListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.listeners.iter().map(|(id, _)| id))
            .finish()
    }
}
