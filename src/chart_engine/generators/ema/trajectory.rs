use super::config::{EmaConfig, EmaShape};
use crate::chart_engine::generators::utils::Trajectory;
use crate::chart_engine::utils::FieldName;

pub fn ema_trajectory(config: &EmaConfig, len: usize) -> Trajectory {
    let mut price = config.start_price;
    let mut prices = Vec::with_capacity(len);
    let mut after_break = Vec::with_capacity(len);
    let (refuel_start, refuel_end) = config.refuel_window;

    for i in 0..len {
        match config.shape {
            EmaShape::Trend => price += 1.0 + (i as f64 / 4.0).sin(),
            EmaShape::BreakDown => {
                if i < config.break_index {
                    price += 0.5;
                } else {
                    price -= 2.0;
                }
            }
            EmaShape::AirRefuel => {
                price += 0.5;
                if i > refuel_start && i < refuel_end {
                    price -= 0.8;
                }
            }
            EmaShape::Flat => {}
        }
        prices.push(price);
        after_break.push(config.shape == EmaShape::BreakDown && i > config.break_index);
    }

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(FieldName::Price.as_str(), prices);
    trajectory.push_bool(&config.after_break_col, after_break);
    trajectory
}
