//! Operation outcomes pushed to the presentation layer.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    /// Operation name, e.g. "add" or "save".
    pub operation: &'static str,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.operation, self.message)
    }
}

pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Discards everything.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notice: &Notice) {}
}

/// Keeps every notice; clones share the same buffer.
#[derive(Clone, Default)]
pub struct CollectingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
