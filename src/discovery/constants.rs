// Current module imports
use super::types::Method;

/// Order in which the client tries discovery methods.
pub const METHOD_PRIORITY: [Method; 3] = [Method::Stun, Method::Dns, Method::Http];

/// Receive buffer size for STUN binding responses.
pub const STUN_RECV_BUFFER: usize = 256;
