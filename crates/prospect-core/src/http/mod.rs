//! Outbound HTTP: the transport seam and the single parameterized request
//! builder shared by every provider adapter.

mod endpoint;
mod providers;
mod transport;

pub use endpoint::{CredentialPlacement, ProviderEndpoint, RequestParts};
pub use transport::{
    HttpTransport, OutboundRequest, OutboundResponse, ReqwestTransport, TransportError,
};
