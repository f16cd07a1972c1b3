use std::fmt;
use std::sync::Arc;

use crate::config::Credentials;
use crate::http::{HttpTransport, ReqwestTransport};

/// Dependencies injected into every provider adapter.
#[derive(Clone)]
pub struct ToolServices {
    pub credentials: Arc<Credentials>,
    pub transport: Arc<dyn HttpTransport>,
}

impl ToolServices {
    pub fn new(credentials: Arc<Credentials>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Services backed by a fresh `reqwest` client.
    pub fn with_reqwest(credentials: Credentials) -> Self {
        Self::new(Arc::new(credentials), Arc::new(ReqwestTransport::new()))
    }
}

impl fmt::Debug for ToolServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolServices")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
