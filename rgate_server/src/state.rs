use rgate_core::registry::TokenRegistry;

use crate::{
    config::GatewayConfig,
    upstream::{basescan::Basescan, coingecko::CoinGecko, facilitator::Facilitator, rpc::BaseRpc},
};

#[derive(Clone)]
pub struct ServerState {
    config: GatewayConfig,
    registry: TokenRegistry,
    coingecko: CoinGecko,
    basescan: Basescan,
    rpc: BaseRpc,
    facilitator: Facilitator,
}

impl From<(GatewayConfig, CoinGecko, Basescan, BaseRpc, Facilitator)> for ServerState {
    fn from(states: (GatewayConfig, CoinGecko, Basescan, BaseRpc, Facilitator)) -> Self {
        let (config, coingecko, basescan, rpc, facilitator) = states;
        Self {
            config,
            registry: TokenRegistry::base(),
            coingecko,
            basescan,
            rpc,
            facilitator,
        }
    }
}

impl ServerState {
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    pub fn coingecko(&self) -> &CoinGecko {
        &self.coingecko
    }

    pub fn basescan(&self) -> &Basescan {
        &self.basescan
    }

    pub fn rpc(&self) -> &BaseRpc {
        &self.rpc
    }

    pub fn facilitator(&self) -> &Facilitator {
        &self.facilitator
    }
}
