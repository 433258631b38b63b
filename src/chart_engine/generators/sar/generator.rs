use super::config::{SarConfig, SAR_DEFAULT_LENGTH};
use super::trajectory::sar_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::{project_fields, regime_stop_exprs};
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::Scenario;
use polars::prelude::*;
use rand::rngs::StdRng;

const SAR_FIELDS: [FieldName; 3] = [FieldName::Price, FieldName::SarUp, FieldName::SarDown];

pub struct SarGenerator;

impl ScenarioGenerator for SarGenerator {
    fn default_length(&self) -> usize {
        SAR_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        &SAR_FIELDS
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = SarConfig::for_scenario(scenario);
        let (sar_up, sar_down) = regime_stop_exprs(
            &config.regime_up_col,
            config.stop_offset,
            FieldName::SarUp,
            FieldName::SarDown,
        );
        let lazy_df = sar_trajectory(&config, length, rng)
            .into_lazy()?
            .with_columns([sar_up, sar_down]);
        project_fields(lazy_df, self.fields())
    }
}

#[cfg(test)]
mod tests {
    use crate::chart_engine::utils::test_helpers::{column, dense_column, generate_seeded};
    use crate::types::{IndicatorKind, Scenario};

    #[test]
    fn test_reversal_flips_exactly_once_after_index_25() {
        let chart = generate_seeded(IndicatorKind::Sar, Scenario::Reversal);
        let up = column(&chart, "sar_up");
        let down = column(&chart, "sar_down");

        let regime: Vec<bool> = up.iter().map(Option::is_some).collect();
        let flips: Vec<usize> = (1..regime.len())
            .filter(|&i| regime[i] != regime[i - 1])
            .collect();
        assert_eq!(flips, vec![26]);

        for i in 0..up.len() {
            // 每个时刻恰好一条止损线有值
            assert!(up[i].is_some() != down[i].is_some(), "index {i}");
        }
        assert!(up[..26].iter().all(Option::is_none));
        assert!(down[26..].iter().all(Option::is_none));
    }

    #[test]
    fn test_stop_offset_from_price() {
        let chart = generate_seeded(IndicatorKind::Sar, Scenario::Bullish);
        let price = dense_column(&chart, "price");
        let up = dense_column(&chart, "sar_up");
        assert!(price.iter().zip(&up).all(|(p, s)| (p - s - 5.0).abs() < 1e-9));
        assert!(column(&chart, "sar_down").iter().all(Option::is_none));
    }
}
