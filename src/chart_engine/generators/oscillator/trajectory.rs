use super::config::OscillatorConfig;
use crate::chart_engine::generators::utils::Trajectory;

/// 强度 = 场景轨迹 + 周期噪声，尚未截断
pub fn oscillator_trajectory(config: &OscillatorConfig, len: usize) -> Trajectory {
    let strength: Vec<f64> = (0..len)
        .map(|i| config.path.at(i) + (i as f64).sin() * config.noise_amplitude)
        .collect();

    let mut trajectory = Trajectory::new(len);
    trajectory.push_f64(&config.strength_col, strength);
    trajectory
}
