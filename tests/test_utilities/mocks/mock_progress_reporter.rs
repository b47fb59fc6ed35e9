use device_reports::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock ProgressReporter that records messages.
///
/// Clones share the same buffers, so a test can keep one handle while the
/// use case owns another.
#[derive(Clone, Default)]
pub struct MockProgressReporter {
    pub messages: Rc<RefCell<Vec<String>>>,
    pub errors: Rc<RefCell<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
