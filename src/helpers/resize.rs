//! Resize observation for responsive charts
//!
//! Layout code reports container bounds into a [`ResizeObserver`]; each chart
//! holds a [`ResponsiveSize`] that subscribes to its own container and reads
//! the latest size on demand. A subscription is released when it is dropped,
//! so a removed chart or a swapped target never leaves an observer behind.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use parking_lot::Mutex;
use tokio::sync::watch;

/// Width and height of an observed container in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shorter side
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

struct Observation {
    target: Arc<str>,
    tx: watch::Sender<ContainerSize>,
}

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    observations: Mutex<AHashMap<u64, Observation>>,
}

/// Registry that fans container size reports out to subscribers
#[derive(Clone, Default)]
pub struct ResizeObserver {
    registry: Arc<Registry>,
}

impl ResizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `target`, seeded with `initial`
    pub fn observe(&self, target: impl Into<Arc<str>>, initial: ContainerSize) -> ResizeSubscription {
        let target = target.into();
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = watch::channel(initial);
        self.registry.observations.lock().insert(
            id,
            Observation {
                target: target.clone(),
                tx,
            },
        );
        tracing::trace!(id, target = %target, "Observing container");

        ResizeSubscription {
            id,
            target,
            rx,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Report the current size of `target`; returns true if any subscriber saw a change
    pub fn report(&self, target: &str, size: ContainerSize) -> bool {
        let observations = self.registry.observations.lock();
        let mut changed = false;
        for observation in observations.values() {
            if &*observation.target != target {
                continue;
            }
            changed |= observation.tx.send_if_modified(|current| {
                if *current == size {
                    false
                } else {
                    *current = size;
                    true
                }
            });
        }
        changed
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.registry.observations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ResizeObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeObserver")
            .field("subscriptions", &self.len())
            .finish()
    }
}

/// A live observation of one container; unobserves on drop
pub struct ResizeSubscription {
    id: u64,
    target: Arc<str>,
    rx: watch::Receiver<ContainerSize>,
    registry: std::sync::Weak<Registry>,
}

impl ResizeSubscription {
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Latest size
    pub fn current(&self) -> ContainerSize {
        *self.rx.borrow()
    }

    /// The new size if it changed since the last call
    pub fn changed(&mut self) -> Option<ContainerSize> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.observations.lock().remove(&self.id);
            tracing::trace!(id = self.id, target = %self.target, "Unobserved container");
        }
    }
}

/// Per-component size signal with a fallback before the first observation
pub struct ResponsiveSize {
    fallback: ContainerSize,
    last: ContainerSize,
    subscription: Option<ResizeSubscription>,
}

impl ResponsiveSize {
    pub fn new(fallback: ContainerSize) -> Self {
        Self {
            fallback,
            last: fallback,
            subscription: None,
        }
    }

    /// Subscribe to `target`, releasing any previous subscription
    pub fn attach(&mut self, observer: &ResizeObserver, target: impl Into<Arc<str>>) {
        let target = target.into();
        if self
            .subscription
            .as_ref()
            .is_some_and(|s| s.target() == &*target)
        {
            return;
        }
        self.subscription = Some(observer.observe(target, self.last));
    }

    /// Release the subscription; the last size is kept
    pub fn detach(&mut self) {
        self.subscription = None;
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Last observed size, or the fallback
    pub fn size(&self) -> ContainerSize {
        self.subscription
            .as_ref()
            .map_or(self.last, ResizeSubscription::current)
    }

    pub fn fallback(&self) -> ContainerSize {
        self.fallback
    }

    /// Emits each distinct size once; `None` when unchanged or detached
    pub fn poll_change(&mut self) -> Option<ContainerSize> {
        let size = self.subscription.as_mut()?.changed()?;
        self.last = size;
        Some(size)
    }
}
