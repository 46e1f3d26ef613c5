//! Change Notification
//!
//! Plain callback list used by the stores to tell the view layer that
//! state moved. Callbacks run synchronously after the mutation completes.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
pub struct Subscribers {
    callbacks: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl Subscribers {
    pub fn add(&self, callback: impl Fn() + 'static) {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Callbacks may subscribe further listeners; the list is copied first
    pub fn notify(&self) {
        let callbacks = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_notify_runs_every_callback() {
        let subscribers = Subscribers::default();
        let hits = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let hits = hits.clone();
            subscribers.add(move || hits.set(hits.get() + 1));
        }
        subscribers.notify();
        assert_eq!(hits.get(), 2);
    }
}
