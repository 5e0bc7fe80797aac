use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::collaborators::Funds;
use crate::game_params::EconomyParams;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CityBudget {
    pub treasury: f64,
    /// Total spent on zoning and construction since the city was founded.
    pub total_spent: f64,
}

impl Default for CityBudget {
    fn default() -> Self {
        Self::new(&EconomyParams::default())
    }
}

impl CityBudget {
    pub fn new(params: &EconomyParams) -> Self {
        Self {
            treasury: params.starting_treasury,
            total_spent: 0.0,
        }
    }
}

impl Funds for CityBudget {
    fn can_afford(&self, cost: f64) -> bool {
        cost <= self.treasury
    }

    fn spend(&mut self, cost: f64) {
        self.treasury -= cost;
        self.total_spent += cost;
    }
}
