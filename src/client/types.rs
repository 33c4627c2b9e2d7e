// Standard library
use std::collections::HashMap;

// Project imports
use crate::discovery::traits::Discoverer;
use crate::discovery::types::Method;

/// Public IP discovery client.
///
/// Holds one discoverer per method, built once at construction and never
/// mutated afterwards. Discoverers keep no per-call state, so a single
/// client is safe to share across concurrent discovery calls.
pub struct Client {
    pub(crate) discoverers: HashMap<Method, Box<dyn Discoverer>>,
}
