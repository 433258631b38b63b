use super::avl::AvlGenerator;
use super::boll::BollGenerator;
use super::ema::EmaGenerator;
use super::ma::MaGenerator;
use super::macd::MacdGenerator;
use super::obv::ObvGenerator;
use super::oscillator::OscillatorGenerator;
use super::sar::SarGenerator;
use super::supertrend::SuperTrendGenerator;
use super::vol::VolGenerator;
use crate::chart_engine::utils::FieldName;
use crate::error::{GeneratorError, ViewerError};
use crate::types::{IndicatorKind, Scenario};
use polars::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::sync::OnceLock;

/// 所有场景生成器必须实现的通用 Trait
///
/// 每个实现只在内部按 Scenario 分支；未处理的场景走该指标的默认轨迹。
pub trait ScenarioGenerator: Send + Sync {
    /// 未指定长度时的序列长度
    fn default_length(&self) -> usize;

    /// t 之后的字段（顺序即输出列顺序）
    fn fields(&self) -> &'static [FieldName];

    /// 生成长度为 length 的样本表，噪声只从 rng 读取
    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError>;
}

/// 生成器注册表类型别名
pub type GeneratorRegistry = HashMap<IndicatorKind, Box<dyn ScenarioGenerator>>;

/// 使用 OnceLock 创建全局唯一的生成器注册表
static REGISTRY: OnceLock<GeneratorRegistry> = OnceLock::new();

/// 获取生成器注册表的单例
pub fn get_generator_registry() -> &'static GeneratorRegistry {
    REGISTRY.get_or_init(|| {
        let mut registry: GeneratorRegistry = HashMap::new();
        registry.insert(IndicatorKind::Ma, Box::new(MaGenerator));
        registry.insert(IndicatorKind::Ema, Box::new(EmaGenerator));
        registry.insert(IndicatorKind::Boll, Box::new(BollGenerator));
        registry.insert(IndicatorKind::Macd, Box::new(MacdGenerator));
        registry.insert(IndicatorKind::Sar, Box::new(SarGenerator));
        registry.insert(IndicatorKind::SuperTrend, Box::new(SuperTrendGenerator));
        registry.insert(IndicatorKind::Avl, Box::new(AvlGenerator));
        registry.insert(IndicatorKind::Obv, Box::new(ObvGenerator));
        registry.insert(IndicatorKind::Vol, Box::new(VolGenerator));
        registry.insert(
            IndicatorKind::Rsi,
            Box::new(OscillatorGenerator::new(IndicatorKind::Rsi)),
        );
        registry.insert(
            IndicatorKind::Wr,
            Box::new(OscillatorGenerator::new(IndicatorKind::Wr)),
        );
        registry.insert(
            IndicatorKind::StochRsi,
            Box::new(OscillatorGenerator::new(IndicatorKind::StochRsi)),
        );
        registry.insert(
            IndicatorKind::Kdj,
            Box::new(OscillatorGenerator::new(IndicatorKind::Kdj)),
        );
        registry
    })
}

/// 按指标取生成器
pub fn get_generator(kind: IndicatorKind) -> Result<&'static dyn ScenarioGenerator, GeneratorError> {
    get_generator_registry()
        .get(&kind)
        .map(|generator| generator.as_ref())
        .ok_or_else(|| GeneratorError::NotRegistered(kind.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_is_registered() {
        for kind in IndicatorKind::ALL {
            assert!(get_generator(kind).is_ok(), "{kind} missing");
        }
        assert_eq!(get_generator_registry().len(), IndicatorKind::ALL.len());
    }

    #[test]
    fn test_default_lengths() {
        let sixty = [
            IndicatorKind::Ma,
            IndicatorKind::Boll,
            IndicatorKind::Macd,
            IndicatorKind::SuperTrend,
        ];
        for kind in IndicatorKind::ALL {
            let expected = if sixty.contains(&kind) { 60 } else { 50 };
            assert_eq!(get_generator(kind).unwrap().default_length(), expected);
        }
    }
}
