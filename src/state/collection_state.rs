// ============================================================================
// COLLECTION STATE - Shared, replace-only containers for fetched lists
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::models::{MapEntry, Order};
use crate::state::ReactiveState;

/// A fetched collection shared by several display surfaces.
///
/// The list is only ever replaced as a whole. `version()` moves on every
/// replacement so views can re-render without the records carrying any
/// bookkeeping field of their own.
pub struct CollectionState<T> {
    items: ReactiveState<Vec<T>>,
    last_replaced_at: Rc<Cell<Option<DateTime<Utc>>>>,
}

pub type OrderList = CollectionState<Order>;
pub type MapList = CollectionState<MapEntry>;

impl<T> CollectionState<T> {
    pub fn new() -> Self {
        Self {
            items: ReactiveState::new(Vec::new()),
            last_replaced_at: Rc::new(Cell::new(None)),
        }
    }

    /// Swap in a new list in a single assignment, then notify.
    pub fn replace(&self, items: Vec<T>) {
        self.last_replaced_at.set(Some(Utc::now()));
        self.items.set(items);
    }

    pub fn with_items<R>(&self, reader: impl FnOnce(&[T]) -> R) -> R {
        self.items.with(|items| reader(items))
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.items.version()
    }

    pub fn last_replaced_at(&self) -> Option<DateTime<Utc>> {
        self.last_replaced_at.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.items.subscribe(callback);
    }
}

impl<T: Clone> CollectionState<T> {
    pub fn items(&self) -> Vec<T> {
        self.items.get()
    }
}

impl<T> Clone for CollectionState<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            last_replaced_at: self.last_replaced_at.clone(),
        }
    }
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self::new()
    }
}
