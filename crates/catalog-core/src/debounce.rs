//! Debouncer
//!
//! Coalesces rapid input into one event carrying the last value. Each push
//! supersedes the previous one; only a push that is still the latest when
//! its delay elapses emits.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

/// Source of timed suspension (browser timers, tokio in tests)
pub trait Clock {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()>>>;
}

pub struct Debouncer<T> {
    delay: Duration,
    clock: Rc<dyn Clock>,
    generation: Rc<Cell<u64>>,
    emit: Rc<dyn Fn(T)>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            clock: self.clock.clone(),
            generation: self.generation.clone(),
            emit: self.emit.clone(),
        }
    }
}

impl<T: 'static> Debouncer<T> {
    pub fn new(delay: Duration, clock: Rc<dyn Clock>, emit: impl Fn(T) + 'static) -> Self {
        Self {
            delay,
            clock,
            generation: Rc::new(Cell::new(0)),
            emit: Rc::new(emit),
        }
    }

    /// Register a new value. The returned future must be spawned; it emits
    /// after the delay unless another push or flush happened meanwhile.
    pub fn push(&self, value: T) -> impl Future<Output = ()> + 'static {
        let ticket = self.bump();
        let generation = self.generation.clone();
        let emit = self.emit.clone();
        let sleep = self.clock.sleep(self.delay);

        async move {
            sleep.await;
            if generation.get() == ticket {
                emit(value);
            }
        }
    }

    /// Emit immediately and drop anything pending
    pub fn flush(&self, value: T) {
        self.bump();
        (self.emit)(value);
    }

    /// Drop anything pending without emitting
    pub fn cancel(&self) {
        self.bump();
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tokio::task::{spawn_local, LocalSet};

    struct TokioClock;

    impl Clock for TokioClock {
        fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
            Box::pin(tokio::time::sleep(duration))
        }
    }

    /// Resolves at once; ordering alone decides what emits
    struct InstantClock;

    impl Clock for InstantClock {
        fn sleep(&self, _duration: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
            Box::pin(std::future::ready(()))
        }
    }

    fn recording(clock: Rc<dyn Clock>) -> (Debouncer<String>, Rc<RefCell<Vec<String>>>) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = emitted.clone();
        let debouncer = Debouncer::new(Duration::from_millis(300), clock, move |value: String| {
            sink.borrow_mut().push(value)
        });
        (debouncer, emitted)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_keystrokes_emit_final_value_once() {
        let (debouncer, emitted) = recording(Rc::new(TokioClock));

        LocalSet::new()
            .run_until(async {
                let mut pending = Vec::new();
                for text in ["R", "Ri", "Ric", "Rick"] {
                    pending.push(spawn_local(debouncer.push(text.to_string())));
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
                // 100ms after the last keystroke: still waiting
                assert!(emitted.borrow().is_empty());

                for task in pending {
                    task.await.unwrap();
                }
            })
            .await;

        assert_eq!(*emitted.borrow(), vec!["Rick".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_pauses_emit_each_value() {
        let (debouncer, emitted) = recording(Rc::new(TokioClock));

        LocalSet::new()
            .run_until(async {
                spawn_local(debouncer.push("Rick".to_string())).await.unwrap();
                spawn_local(debouncer.push("Morty".to_string())).await.unwrap();
            })
            .await;

        assert_eq!(*emitted.borrow(), vec!["Rick".to_string(), "Morty".to_string()]);
    }

    #[tokio::test]
    async fn test_only_latest_push_emits() {
        let (debouncer, emitted) = recording(Rc::new(InstantClock));

        let first = debouncer.push("a".to_string());
        let second = debouncer.push("ab".to_string());
        first.await;
        second.await;

        assert_eq!(*emitted.borrow(), vec!["ab".to_string()]);
    }

    #[tokio::test]
    async fn test_flush_supersedes_pending() {
        let (debouncer, emitted) = recording(Rc::new(InstantClock));

        let pending = debouncer.push("Summer".to_string());
        debouncer.flush(String::new());
        pending.await;

        assert_eq!(*emitted.borrow(), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_cancel_drops_pending() {
        let (debouncer, emitted) = recording(Rc::new(InstantClock));

        let pending = debouncer.push("Beth".to_string());
        debouncer.cancel();
        pending.await;

        assert!(emitted.borrow().is_empty());
    }
}
