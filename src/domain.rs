// Domain layer modules
pub mod response_envelope;

// Re-exports
pub use response_envelope::{EchoBody, ResponseEnvelope, HELLO_MESSAGE, STATUS_OK};
