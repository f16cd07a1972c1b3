//! Test doubles for the outbound HTTP seam.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::http::{HttpTransport, OutboundRequest, OutboundResponse, TransportError};

enum Reply {
    Respond { status: StatusCode, body: Vec<u8> },
    Fail(String),
}

/// Records every request it is asked to send and answers with a canned
/// reply.
pub struct RecordingTransport {
    calls: Mutex<Vec<OutboundRequest>>,
    reply: Reply,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Respond {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body: body.into(),
            },
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Fail(message.into()),
        }
    }

    pub fn calls(&self) -> Vec<OutboundRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_call(&self) -> Option<OutboundRequest> {
        self.calls().pop()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: OutboundRequest) -> Result<OutboundResponse, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match &self.reply {
            Reply::Respond { status, body } => Ok(OutboundResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Fail(message) => Err(TransportError(message.clone())),
        }
    }
}
