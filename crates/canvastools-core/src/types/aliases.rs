//! Type aliases for commonly used complex types.
//!
//! The region engine is single-threaded: every transition runs inside one
//! event handler. Hosts that need to observe engine callbacks from their
//! own state hold it behind `Shared<T>`.
//!
//! ```rust,ignore
//! use canvastools_core::types::*;
//!
//! let log: SharedVec<String> = shared(Vec::new());
//! log.borrow_mut().push("selected r1".into());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// An optional shared reference, for lazily-initialized shared state.
pub type SharedOption<T> = Rc<RefCell<Option<T>>>;

/// A shared vector, typically an event log written by callbacks.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new `SharedOption<T>` initialized to `None`.
#[inline]
pub fn shared_none<T>() -> SharedOption<T> {
    Rc::new(RefCell::new(None))
}
