use super::config::AvlConfig;
use crate::chart_engine::generators::utils::Trajectory;
use crate::chart_engine::utils::FieldName;

pub fn avl_trajectory(config: &AvlConfig, len: usize) -> Trajectory {
    let mut price = config.start_price;
    let mut prices = Vec::with_capacity(len);

    for i in 0..len {
        let drift = 0.5 + (i as f64 / 3.0).sin();
        if config.rising {
            price += drift;
            if config.dip_index == Some(i) {
                price -= config.dip_size;
            }
        } else {
            price -= drift;
        }
        prices.push(price);
    }

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(FieldName::Price.as_str(), prices);
    trajectory
}
