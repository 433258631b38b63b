use super::config::SarConfig;
use crate::chart_engine::generators::utils::Trajectory;
use crate::chart_engine::utils::FieldName;
use rand::rngs::StdRng;
use rand::Rng;

pub fn sar_trajectory(config: &SarConfig, len: usize, rng: &mut StdRng) -> Trajectory {
    let mut price = config.start_price;
    let mut up = config.start_up;
    let mut prices = Vec::with_capacity(len);
    let mut regime = Vec::with_capacity(len);

    for i in 0..len {
        if config.flip_after.is_some_and(|k| i == k + 1) {
            up = !up;
        }
        let step = config.base_step + rng.random::<f64>();
        if up {
            price += step;
        } else {
            price -= step;
        }
        prices.push(price);
        regime.push(up);
    }

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(FieldName::Price.as_str(), prices);
    trajectory.push_bool(&config.regime_up_col, regime);
    trajectory
}
