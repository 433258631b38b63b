use super::config::{VolBreakout, VolConfig};
use crate::chart_engine::generators::utils::Trajectory;
use crate::chart_engine::utils::FieldName;
use rand::rngs::StdRng;
use rand::Rng;

pub fn vol_trajectory(config: &VolConfig, len: usize, rng: &mut StdRng) -> Trajectory {
    let mut price = config.start_price;
    let mut prices = Vec::with_capacity(len);
    let mut is_up = Vec::with_capacity(len);
    let mut base_volume = Vec::with_capacity(len);
    let mut after_split = Vec::with_capacity(len);

    for i in 0..len {
        let past_split = i > config.split_index;
        let up = if past_split {
            config.breakout == VolBreakout::Up
        } else {
            rng.random::<f64>() > 0.5
        };
        price += if up { config.up_step } else { -config.down_step };

        prices.push(price);
        is_up.push(up);
        base_volume.push(config.base_volume + rng.random::<f64>() * config.volume_jitter);
        after_split.push(past_split);
    }

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(FieldName::Price.as_str(), prices);
    trajectory.push_bool(FieldName::IsUp.as_str(), is_up);
    trajectory.push_f64(&config.base_volume_col, base_volume);
    trajectory.push_bool(&config.after_split_col, after_split);
    trajectory
}
