use super::config::{BollConfig, BollMode};
use crate::chart_engine::generators::utils::Trajectory;
use crate::chart_engine::utils::FieldName;

pub fn boll_trajectory(config: &BollConfig, len: usize) -> Trajectory {
    let mut price = config.start_price;
    let mut prices = Vec::with_capacity(len);
    let mut volatility = Vec::with_capacity(len);

    for i in 0..len {
        let x = i as f64;
        let step_volatility = match config.mode {
            BollMode::Squeeze => {
                price = config.start_price + x.sin() * 2.0;
                config.squeeze_volatility
            }
            BollMode::Expansion => {
                let expanded = i > config.expand_after;
                price += if expanded { 2.0 } else { x.sin() };
                if expanded {
                    config.expanded_volatility
                } else {
                    config.calm_volatility
                }
            }
            BollMode::Flat => config.base_volatility,
        };
        prices.push(price);
        volatility.push(step_volatility);
    }

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(FieldName::Price.as_str(), prices);
    trajectory.push_f64(&config.volatility_col, volatility);
    trajectory
}
