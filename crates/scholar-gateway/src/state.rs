//! Gateway application state.

use std::sync::Arc;

use crate::client::StudentRpc;

/// Shared state for gateway handlers: the RPC client used to reach the
/// record service.
pub struct GatewayState<C> {
    pub client: Arc<C>,
}

impl<C> GatewayState<C> {
    pub fn new(client: C) -> Self {
        GatewayState {
            client: Arc::new(client),
        }
    }
}

impl<C: StudentRpc> GatewayState<C> {
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C> Clone for GatewayState<C> {
    fn clone(&self) -> Self {
        GatewayState {
            client: Arc::clone(&self.client),
        }
    }
}
