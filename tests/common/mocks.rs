use std::cell::RefCell;
use std::collections::VecDeque;

use w3c_validator::{ValidationError, ValidationRequest, ValidatorTransport};

/// Canned reply for one submission
#[derive(Clone, Debug)]
pub enum MockReply {
    Body(String),
    Status(u16),
}

/// Mock transport for testing orchestration without network calls.
///
/// Replies are consumed in order; running out is reported as a 503.
pub struct MockTransport {
    replies: RefCell<VecDeque<MockReply>>,
    request_log: RefCell<Vec<ValidationRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(VecDeque::new()),
            request_log: RefCell::new(Vec::new()),
        }
    }

    pub fn with_bodies(bodies: &[&str]) -> Self {
        let transport = Self::new();
        for body in bodies {
            transport.add_body(body);
        }
        transport
    }

    pub fn add_body(&self, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(MockReply::Body(body.to_string()));
    }

    pub fn add_status(&self, status: u16) {
        self.replies.borrow_mut().push_back(MockReply::Status(status));
    }

    pub fn request_log(&self) -> Vec<ValidationRequest> {
        self.request_log.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.request_log.borrow().len()
    }
}

impl ValidatorTransport for MockTransport {
    async fn submit(&self, request: &ValidationRequest) -> Result<String, ValidationError> {
        self.request_log.borrow_mut().push(request.clone());

        match self.replies.borrow_mut().pop_front() {
            Some(MockReply::Body(body)) => Ok(body),
            Some(MockReply::Status(status)) => Err(ValidationError::HttpStatus {
                request: request.to_string(),
                status,
            }),
            None => Err(ValidationError::HttpStatus {
                request: request.to_string(),
                status: 503,
            }),
        }
    }
}
