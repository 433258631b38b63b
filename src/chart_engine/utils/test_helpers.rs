use crate::catalog::Catalog;
use crate::chart_engine::generators::generate_with_rng;
use crate::types::{ConceptChart, IndicatorKind, Scenario};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const TEST_SEED: u64 = 20240601;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_SEED)
}

/// 三章示例目录：均线、MACD、纪律
pub const SAMPLE_CATALOG: &str = r#"[
    {
        "id": "ma",
        "title": "均线系统",
        "subtitle": "趋势的骨架",
        "description": "均线的排列与交叉",
        "sections": [
            {"title": "多头排列", "type": "concept", "content": "短中长期均线依次向上", "chartType": "ma", "chartScenario": "bullish"},
            {"title": "交易员笔记", "type": "tips", "content": ["不追高", "等回踩"]}
        ]
    },
    {
        "id": "macd",
        "title": "MACD",
        "description": "动能与背离",
        "sections": [
            {"title": "底背离", "type": "case-study", "content": "价格新低而 DIF 抬高", "chartType": "macd", "chartScenario": "divergence_bull"},
            {"title": "卖出信号", "type": "list", "content": ["顶背离", "死叉"]}
        ]
    },
    {
        "id": "discipline",
        "title": "交易纪律",
        "description": "活下来",
        "sections": [
            {"title": "铁律", "type": "discipline", "content": ["永远设置止损"]}
        ]
    }
]"#;

pub fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_CATALOG).unwrap()
}

/// 以固定种子生成默认长度的样本
pub fn generate_seeded(kind: IndicatorKind, scenario: Scenario) -> ConceptChart {
    generate_with_rng(kind, scenario, 0, &mut seeded_rng()).unwrap()
}

/// 读取数值列，null 保留为 None
pub fn column(chart: &ConceptChart, field: &str) -> Vec<Option<f64>> {
    chart.column_f64(field).unwrap()
}

/// 读取数值列，要求无 null
pub fn dense_column(chart: &ConceptChart, field: &str) -> Vec<f64> {
    column(chart, field)
        .into_iter()
        .map(|v| v.expect("unexpected null"))
        .collect()
}

/// 最小二乘线性拟合斜率（x 为下标）
pub fn linear_fit_slope(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.len() < 2 {
        return 0.0;
    }
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;
    let (num, den) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, y)| {
            let dx = i as f64 - mean_x;
            (num + dx * (y - mean_y), den + dx * dx)
        });
    num / den
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_fit_slope() {
        let up: Vec<f64> = (0..10).map(|i| 3.0 + 2.0 * i as f64).collect();
        assert!((linear_fit_slope(&up) - 2.0).abs() < 1e-9);
        let down: Vec<f64> = (0..10).map(|i| -0.5 * i as f64).collect();
        assert!(linear_fit_slope(&down) < 0.0);
        assert_eq!(linear_fit_slope(&[1.0]), 0.0);
    }
}
