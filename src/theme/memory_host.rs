//! In-memory [`ThemeHost`] for native tests.
//!
//! Clones share state through `Rc` handles, so a test can hand one clone to
//! the resolver (or the runtime) and keep another to drive the OS signal and
//! inspect storage and the root marker.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::config::RootMarker;
use super::error::ThemeError;
use super::host::ThemeHost;

#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryHost {
    storage: Rc<RefCell<HashMap<String, String>>>,
    system_dark: Rc<Cell<Option<bool>>>,
    hidden: Rc<Cell<bool>>,
    storage_broken: Rc<Cell<bool>>,
    root_dark: Rc<Cell<Option<bool>>>,
    root_attribute: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
    root_applies: Rc<Cell<usize>>,
}

impl MemoryHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_system_dark(self, dark: Option<bool>) -> Self {
        self.system_dark.set(dark);
        self
    }

    pub(crate) fn with_stored(self, key: &str, value: &str) -> Self {
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    pub(crate) fn set_system_dark(&self, dark: Option<bool>) {
        self.system_dark.set(dark);
    }

    pub(crate) fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
    }

    pub(crate) fn break_storage(&self, broken: bool) {
        self.storage_broken.set(broken);
    }

    pub(crate) fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    pub(crate) fn root_dark(&self) -> Option<bool> {
        self.root_dark.get()
    }

    pub(crate) fn root_attribute(&self) -> Option<String> {
        self.root_attribute.borrow().clone()
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.get()
    }

    pub(crate) fn root_applies(&self) -> usize {
        self.root_applies.get()
    }

    fn check_storage(&self, op: &'static str) -> Result<(), ThemeError> {
        if self.storage_broken.get() {
            return Err(ThemeError::storage(op, "SecurityError"));
        }
        Ok(())
    }
}

impl ThemeHost for MemoryHost {
    fn read_preference(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.check_storage("read")?;
        Ok(self.stored(key))
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.check_storage("write")?;
        self.writes.set(self.writes.get() + 1);
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_preference(&mut self, key: &str) -> Result<(), ThemeError> {
        self.check_storage("remove")?;
        self.storage.borrow_mut().remove(key);
        Ok(())
    }

    fn system_prefers_dark(&self, _query: &str) -> Result<Option<bool>, ThemeError> {
        Ok(self.system_dark.get())
    }

    fn page_visible(&self) -> bool {
        !self.hidden.get()
    }

    fn apply_root(&mut self, marker: &RootMarker, dark: bool) -> Result<(), ThemeError> {
        self.root_applies.set(self.root_applies.get() + 1);
        self.root_dark.set(Some(dark));
        *self.root_attribute.borrow_mut() =
            marker.attribute.as_ref().map(|_| if dark { "dark" } else { "light" }.to_owned());
        Ok(())
    }
}
