use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked with an owned snapshot of the items it observes.
pub type Listener<T> = Rc<dyn Fn(Vec<T>)>;

/// Handle returned on registration, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Ordered registry of listeners over items of type `T`.
///
/// Invocation order is registration order. The same closure may be
/// registered several times and then fires once per registration.
pub struct Listeners<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ListenerId, Listener<T>)>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: impl Fn(Vec<T>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns false if `id` was not registered (or was already removed).
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Invoke every listener in registration order.
    ///
    /// `snapshot` is called once per listener, right before that listener
    /// runs, so a listener sees any change made by an earlier one. No borrow
    /// is held while a listener runs: listeners may add or remove listeners
    /// and may trigger a nested notification pass. A listener added during
    /// the pass runs later in that same pass; one removed before its turn
    /// is skipped.
    pub fn notify(&self, mut snapshot: impl FnMut() -> Vec<T>) {
        // Ids only grow and entries stay in id order, so "next id after the
        // last one called" survives removals and picks up additions.
        let mut last: Option<ListenerId> = None;

        while let Some((id, listener)) = self.next_after(last) {
            tracing::trace!(?id, "notifying listener");
            last = Some(id);
            listener(snapshot());
        }
    }

    fn next_after(&self, last: Option<ListenerId>) -> Option<(ListenerId, Listener<T>)> {
        self.entries
            .borrow()
            .iter()
            .find(|(id, _)| last.map_or(true, |last| *id > last))
            .map(|(id, listener)| (*id, Rc::clone(listener)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, Listeners<u32>) {
        (Rc::new(RefCell::new(Vec::new())), Listeners::new())
    }

    #[test]
    fn test_notify_in_registration_order() {
        let (log, listeners) = recorder();
        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            listeners.add(move |items: Vec<u32>| {
                log.borrow_mut().push(format!("{}:{}", name, items.len()))
            });
        }

        listeners.notify(|| vec![1, 2]);

        assert_eq!(*log.borrow(), vec!["first:2", "second:2", "third:2"]);
    }

    #[test]
    fn test_no_call_on_registration() {
        let (log, listeners) = recorder();
        let log2 = Rc::clone(&log);
        listeners.add(move |_| log2.borrow_mut().push("called".into()));
        assert!(log.borrow().is_empty());
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_fires_twice() {
        let count = Rc::new(Cell::new(0));
        let listeners: Listeners<u32> = Listeners::new();
        let callback = {
            let count = Rc::clone(&count);
            move |_: Vec<u32>| count.set(count.get() + 1)
        };
        listeners.add(callback.clone());
        listeners.add(callback);

        listeners.notify(Vec::new);

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_remove_listener() {
        let count = Rc::new(Cell::new(0));
        let listeners: Listeners<u32> = Listeners::new();
        let c = Rc::clone(&count);
        let id = listeners.add(move |_| c.set(c.get() + 1));

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        listeners.notify(Vec::new);

        assert_eq!(count.get(), 0);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_listener_removed_mid_pass_is_skipped() {
        let listeners: Rc<Listeners<u32>> = Rc::new(Listeners::new());
        let count = Rc::new(Cell::new(0));
        let victim = Rc::new(Cell::new(None));

        {
            let listeners_ref = Rc::downgrade(&listeners);
            let victim = Rc::clone(&victim);
            listeners.add(move |_| {
                if let (Some(listeners), Some(id)) = (listeners_ref.upgrade(), victim.get()) {
                    listeners.remove(id);
                }
            });
        }
        let c = Rc::clone(&count);
        victim.set(Some(listeners.add(move |_| c.set(c.get() + 1))));

        listeners.notify(Vec::new);

        assert_eq!(count.get(), 0);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn test_listener_added_mid_pass_runs_in_same_pass() {
        let listeners: Rc<Listeners<u32>> = Rc::new(Listeners::new());
        let count = Rc::new(Cell::new(0));

        {
            let listeners_ref = Rc::downgrade(&listeners);
            let count = Rc::clone(&count);
            let added = Cell::new(false);
            listeners.add(move |_| {
                if added.replace(true) {
                    return;
                }
                if let Some(listeners) = listeners_ref.upgrade() {
                    let count = Rc::clone(&count);
                    listeners.add(move |_| count.set(count.get() + 1));
                }
            });
        }

        listeners.notify(Vec::new);
        assert_eq!(count.get(), 1);

        listeners.notify(Vec::new);
        assert_eq!(count.get(), 2);
        assert_eq!(listeners.len(), 2);
    }

    #[test]
    fn test_snapshot_taken_per_listener() {
        let listeners: Listeners<u32> = Listeners::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for _ in 0..3 {
            let seen = Rc::clone(&seen);
            listeners.add(move |items: Vec<u32>| seen.borrow_mut().push(items[0]));
        }

        let mut calls = 0;
        listeners.notify(|| {
            calls += 1;
            vec![calls]
        });

        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }
}
