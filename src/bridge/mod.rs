//! Native-messaging bridge
//!
//! Lets the summarizer run as a browser native-messaging host: framed JSON
//! requests come in on one stream and responses go out on another.

pub mod codec;
pub mod host;
pub mod message;

pub use codec::{read_message, write_message, MAX_INBOUND_FRAME, MAX_OUTBOUND_FRAME};
pub use host::NativeHost;
pub use message::{Request, Response};
