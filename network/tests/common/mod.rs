#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use lamden_network::rpc::{FromNetworkConfig, NodeApi};
use lamden_network::{ErrorKind, Network, NetworkConfig};

/// Networks named this fail to construct their node API client.
pub const BROKEN_CLIENT: &str = "broken client";

/// Node API client that answers pings from a script.
#[derive(Default)]
pub struct MockApi {
    responses: Mutex<VecDeque<lamden_network::Result<bool>>>,
    calls: AtomicUsize,
}

impl MockApi {
    pub fn respond(&self, online: bool) {
        self.push(Ok(online));
    }

    pub fn fail(&self, msg: &'static str) {
        self.push(Err(ErrorKind::Rpc.message(msg)));
    }

    fn push(&self, response: lamden_network::Result<bool>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FromNetworkConfig for MockApi {
    fn from_config(config: &NetworkConfig) -> lamden_network::Result<Self> {
        if config.name.as_deref() == Some(BROKEN_CLIENT) {
            return Err(ErrorKind::Rpc.message("mock client refused config"));
        }
        Ok(Self::default())
    }
}

#[async_trait]
impl NodeApi for MockApi {
    async fn ping_server(&self) -> lamden_network::Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(ErrorKind::Rpc.message("no scripted response")))
    }
}

pub fn mock_network(config: NetworkConfig) -> lamden_network::Result<Network<MockApi>> {
    Network::<MockApi>::from_config(config)
}
