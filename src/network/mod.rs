pub mod client;
pub mod transport;

pub use client::{FALLBACK_TEXT, RelayClient};
pub use transport::HttpTransport;
