//! Message vocabulary of the extension's runtime broadcast channel.
//!
//! Everything the relay and the offscreen document agree on lives here: the
//! direct-proxy tags, the legacy action allow-list, broadcast events, response
//! envelopes and the routing decision for an inbound message.

mod api_call;
mod error;
mod message;
mod route;

pub use api_call::ApiCall;
pub use error::RelayError;
pub use message::{ApiResponse, ErrorResponse, LegacyAction, ProxyTag, RelayEvent, Target, forwarded};
pub use route::{ForwardReason, Route};
