//! Shared call log for closure-based callbacks.

use std::sync::Arc;

use parking_lot::Mutex;

/// Cloneable, append-only log.
///
/// Clone it into callbacks, call [`record`](Self::record) from them, and
/// inspect the entries from the test body.
///
/// ```rust
/// use astrelis_test_utils::CallRecorder;
///
/// let recorder = CallRecorder::new();
/// let sink = recorder.clone();
/// let callback = move |value: u32| sink.record(value);
///
/// callback(1);
/// callback(2);
/// assert_eq!(recorder.entries(), vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct CallRecorder<E> {
    entries: Arc<Mutex<Vec<E>>>,
}

impl<E> Clone for CallRecorder<E> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<E> Default for CallRecorder<E> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<E> CallRecorder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: E) {
        self.entries.lock().push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Number of entries matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&E) -> bool) -> usize {
        self.entries.lock().iter().filter(|entry| predicate(entry)).count()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<E> {
        std::mem::take(&mut *self.entries.lock())
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl<E: Clone> CallRecorder<E> {
    pub fn entries(&self) -> Vec<E> {
        self.entries.lock().clone()
    }

    pub fn last(&self) -> Option<E> {
        self.entries.lock().last().cloned()
    }
}
