use crate::types::Scenario;

pub const VOL_DEFAULT_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolBreakout {
    /// 放量突破：分界点后持续上涨且量能放大
    Up,
    /// 缩量跌破（假突破）：分界点后下跌且量能萎缩
    Down,
    None,
}

/// 成交量场景配置
pub struct VolConfig {
    pub breakout: VolBreakout,
    /// 分界下标，之前方向随机
    pub split_index: usize,
    pub start_price: f64,
    pub up_step: f64,
    pub down_step: f64,
    /// 基础量能 = base_volume + U * volume_jitter
    pub base_volume: f64,
    pub volume_jitter: f64,
    pub spike: f64,
    pub fade: f64,
    pub base_volume_col: String,
    pub after_split_col: String,
}

impl VolConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        let breakout = match scenario {
            Scenario::BreakoutUp => VolBreakout::Up,
            Scenario::BreakoutDown => VolBreakout::Down,
            _ => VolBreakout::None,
        };
        Self {
            breakout,
            split_index: 25,
            start_price: 50.0,
            up_step: 2.0,
            down_step: 1.5,
            base_volume: 200.0,
            volume_jitter: 300.0,
            spike: 800.0,
            fade: 100.0,
            base_volume_col: "base_volume".to_string(),
            after_split_col: "after_split".to_string(),
        }
    }

    /// 分界点后叠加到基础量能上的增量
    pub fn volume_shift(&self) -> f64 {
        match self.breakout {
            VolBreakout::Up => self.spike,
            VolBreakout::Down => -self.fade,
            VolBreakout::None => 0.0,
        }
    }
}
