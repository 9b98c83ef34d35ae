//! The escape hatch for values outside the closed [`Value`](crate::Value)
//! union.
//!
//! A logging payload can carry anything: sockets, lock guards, callables,
//! framework request objects. The serializer only ever asks such a value for
//! a text form; the sanitizing filter only ever asks it for a duplicate.
//! Either request may fail, and both callers absorb the failure — the
//! serializer substitutes a sentinel, the filter drops the entry.

use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

pub trait OpaqueValue {
    /// Best-effort human-readable form.
    fn repr(&self) -> Result<String>;

    /// Duplicate the handle so the copy can outlive the original.
    fn try_clone(&self) -> Result<Rc<dyn OpaqueValue>>;
}

/// Handle with a text form but no safe duplicate — a lock, a raw fd, a
/// connection.
pub struct DisplayHandle<T> {
    inner: T,
}

impl<T: fmt::Display> DisplayHandle<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: fmt::Display> OpaqueValue for DisplayHandle<T> {
    fn repr(&self) -> Result<String> {
        Ok(self.inner.to_string())
    }

    fn try_clone(&self) -> Result<Rc<dyn OpaqueValue>> {
        Err(Error::Duplicate(self.inner.to_string()))
    }
}

/// Handle that can be both rendered and duplicated.
pub struct CloneableHandle<T> {
    inner: T,
}

impl<T: fmt::Display + Clone> CloneableHandle<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: fmt::Display + Clone + 'static> OpaqueValue for CloneableHandle<T> {
    fn repr(&self) -> Result<String> {
        Ok(self.inner.to_string())
    }

    fn try_clone(&self) -> Result<Rc<dyn OpaqueValue>> {
        Ok(Rc::new(Self {
            inner: self.inner.clone(),
        }))
    }
}
