use super::config::{MacdConfig, MacdShape};
use crate::chart_engine::generators::utils::Trajectory;
use crate::chart_engine::utils::FieldName;

/// 价格与 DIF 都是进度 tau = i / len 的函数
pub fn macd_trajectory(config: &MacdConfig, len: usize) -> Trajectory {
    let mut prices = Vec::with_capacity(len);
    let mut dif = Vec::with_capacity(len);
    let mut in_refuel = Vec::with_capacity(len);
    let (refuel_start, refuel_end) = config.refuel_window;
    let span = len.max(1) as f64;

    for i in 0..len {
        let x = i as f64;
        let tau = x / span;
        let wave = (x / 3.0).sin();
        let (price, fast) = match config.shape {
            MacdShape::DivergenceBull => (80.0 - tau * 20.0 + wave * 5.0, -5.0 + tau * 8.0 + wave * 2.0),
            MacdShape::DivergenceBear => (100.0 + tau * 30.0 + wave * 5.0, 8.0 - tau * 10.0 + wave * 2.0),
            MacdShape::Rising => (config.base_price, -5.0 + tau * 12.0),
            MacdShape::AirRefuel => {
                let fast = if i < 20 {
                    x * 0.2
                } else if i < 40 {
                    4.0 - (x - 20.0) * 0.2
                } else {
                    (x - 40.0) * 0.3
                };
                (config.base_price, fast)
            }
            MacdShape::Falling => (config.base_price, 5.0 - tau * 12.0),
        };
        prices.push(price);
        dif.push(fast);
        in_refuel.push(
            config.shape == MacdShape::AirRefuel && i > refuel_start && i < refuel_end,
        );
    }

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(FieldName::Price.as_str(), prices);
    trajectory.push_f64(FieldName::Macd.as_str(), dif);
    trajectory.push_bool(&config.in_refuel_col, in_refuel);
    trajectory
}
