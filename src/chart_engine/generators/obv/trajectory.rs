use super::config::{ObvConfig, ObvFlow};
use crate::chart_engine::generators::utils::Trajectory;
use crate::chart_engine::utils::FieldName;
use rand::rngs::StdRng;
use rand::Rng;

/// 价格与 OBV 累加器都是逐步递推
pub fn obv_trajectory(config: &ObvConfig, len: usize, rng: &mut StdRng) -> Trajectory {
    let mut price = config.start_price;
    let mut obv = config.start_obv;
    let mut prices = Vec::with_capacity(len);
    let mut obvs = Vec::with_capacity(len);

    for _ in 0..len {
        price += config.price_step;
        match config.flow {
            ObvFlow::Accumulate { base, jitter } => obv += base + rng.random::<f64>() * jitter,
            ObvFlow::Distribute { step } => obv -= step,
            ObvFlow::Flat => {}
        }
        prices.push(price);
        obvs.push(obv);
    }

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(FieldName::Price.as_str(), prices);
    trajectory.push_f64(FieldName::Obv.as_str(), obvs);
    trajectory
}
