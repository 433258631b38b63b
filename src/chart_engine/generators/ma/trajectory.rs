use super::config::{MaConfig, MaShape};
use crate::chart_engine::generators::utils::Trajectory;
use crate::chart_engine::utils::FieldName;

pub fn ma_trajectory(config: &MaConfig, len: usize) -> Trajectory {
    let mut price = config.start_price;
    let mut prices = Vec::with_capacity(len);
    let mut wave_sin = Vec::with_capacity(len);
    let mut wave_cos = Vec::with_capacity(len);
    let mut in_dip = Vec::with_capacity(len);

    for i in 0..len {
        let x = i as f64;
        match config.shape {
            MaShape::FanUp => price += x * 0.15 + (x / 5.0).sin(),
            MaShape::FanDown => price = 100.0 - x * 1.5 + (x / 5.0).sin(),
            MaShape::Entangled => price = 50.0 + (x / 2.0).sin() * 5.0,
            MaShape::RefuseDeath => {
                if i < config.dip_start {
                    price = config.start_price + x * 0.5;
                } else if i < config.dip_end {
                    price -= 0.5;
                } else {
                    price += 1.0;
                }
            }
            MaShape::Flat => {}
        }
        prices.push(price);
        wave_sin.push(x.sin());
        wave_cos.push(x.cos());
        in_dip.push(
            config.shape == MaShape::RefuseDeath && i > config.dip_start && i < config.dip_end,
        );
    }

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(FieldName::Price.as_str(), prices);
    trajectory.push_f64(&config.wave_sin_col, wave_sin);
    trajectory.push_f64(&config.wave_cos_col, wave_cos);
    trajectory.push_bool(&config.in_dip_col, in_dip);
    trajectory
}
