use super::config::SuperTrendConfig;
use crate::chart_engine::generators::utils::Trajectory;
use crate::chart_engine::utils::FieldName;
use rand::rngs::StdRng;
use rand::Rng;

pub fn supertrend_trajectory(
    config: &SuperTrendConfig,
    len: usize,
    rng: &mut StdRng,
) -> Trajectory {
    let mut price = config.start_price;
    let mut up = true;
    let mut prices = Vec::with_capacity(len);
    let mut regime = Vec::with_capacity(len);

    for i in 0..len {
        if config.flip_after.is_some_and(|k| i > k) {
            up = false;
        }
        let noise = rng.random::<f64>();
        if up {
            price += config.up_step + noise;
        } else {
            price -= config.down_step + noise;
        }
        prices.push(price);
        regime.push(up);
    }

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(FieldName::Price.as_str(), prices);
    trajectory.push_bool(&config.regime_up_col, regime);
    trajectory
}
