//! Authenticated JSON-over-HTTP transport shared by the API adapters.

mod transport;

pub use transport::{HttpTransport, JsonResponse, TransportError};
