use crate::types::Scenario;

pub const MA_DEFAULT_LENGTH: usize = 60;

/// 价格轨迹形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaShape {
    /// 多头发散：增量随时间变大
    FanUp,
    /// 空头发散：线性下行
    FanDown,
    /// 均线缠绕
    Entangled,
    /// 上涨 → 回调 → 再上涨，均线靠近但不交叉
    RefuseDeath,
    Flat,
}

/// MA 场景配置
pub struct MaConfig {
    pub shape: MaShape,
    pub start_price: f64,
    /// ma5 / ma10 / ma20 / ma60 相对价格的倍数
    pub ratios: [f64; 4],
    /// refuse_death 回调区间 [dip_start, dip_end)
    pub dip_start: usize,
    pub dip_end: usize,
    /// 回调区间内 ma10 的倍数（低于 ma5 的 0.98，保持不交叉）
    pub dip_ma10_ratio: f64,
    /// 缠绕形态下慢线固定的中枢
    pub pivot: f64,
    /// 缠绕形态下快线围绕价格摆动的幅度
    pub wobble: f64,
    // 辅助列名
    pub wave_sin_col: String,
    pub wave_cos_col: String,
    pub in_dip_col: String,
}

impl MaConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        let shape = match scenario {
            Scenario::Bullish | Scenario::ResonanceBull => MaShape::FanUp,
            Scenario::Bearish | Scenario::ResonanceBear => MaShape::FanDown,
            Scenario::Consolidation => MaShape::Entangled,
            Scenario::RefuseDeath => MaShape::RefuseDeath,
            _ => MaShape::Flat,
        };
        // 仅名称带 bear 的场景把均线压在价格上方
        let averages_above = matches!(
            scenario,
            Scenario::Bearish | Scenario::DivergenceBear | Scenario::ResonanceBear
        );
        let ratios = if averages_above {
            [1.02, 1.05, 1.10, 1.20]
        } else {
            [0.98, 0.95, 0.90, 0.80]
        };
        Self {
            shape,
            start_price: 50.0,
            ratios,
            dip_start: 30,
            dip_end: 45,
            dip_ma10_ratio: 0.975,
            pivot: 50.0,
            wobble: 2.0,
            wave_sin_col: "wave_sin".to_string(),
            wave_cos_col: "wave_cos".to_string(),
            in_dip_col: "in_dip".to_string(),
        }
    }
}
