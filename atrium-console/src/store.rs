//! Observable state cells
//!
//! Console state lives in small `Store<T>` cells. Readers take snapshots
//! or subscribe for change notifications; writers go through `set` and
//! `update` so every change is broadcast.

use tokio::sync::watch;

/// Single observable value
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate the value in place and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Watch for changes
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_snapshot() {
        let store = Store::new(3u32);
        assert_eq!(store.get(), 3);

        store.set(7);
        assert_eq!(store.get(), 7);
    }

    #[test]
    fn test_update_mutates_in_place() {
        let store = Store::new(vec![1u32]);
        store.update(|v| v.push(2));
        assert_eq!(store.get(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = Store::new(0u32);
        let mut rx = store.subscribe();

        store.set(5);
        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow_and_update(), 5);
    }
}
