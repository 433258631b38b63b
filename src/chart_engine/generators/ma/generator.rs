use super::config::{MaConfig, MA_DEFAULT_LENGTH};
use super::expr::ma_exprs;
use super::trajectory::ma_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::project_fields;
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::Scenario;
use polars::prelude::*;
use rand::rngs::StdRng;

const MA_FIELDS: [FieldName; 5] = [
    FieldName::Price,
    FieldName::Ma5,
    FieldName::Ma10,
    FieldName::Ma20,
    FieldName::Ma60,
];

pub struct MaGenerator;

impl ScenarioGenerator for MaGenerator {
    fn default_length(&self) -> usize {
        MA_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        &MA_FIELDS
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        _rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = MaConfig::for_scenario(scenario);
        let lazy_df = ma_trajectory(&config, length)
            .into_lazy()?
            .with_columns(ma_exprs(&config));
        project_fields(lazy_df, self.fields())
    }
}

#[cfg(test)]
mod tests {
    use crate::chart_engine::utils::test_helpers::{dense_column, generate_seeded};
    use crate::types::{IndicatorKind, Scenario};

    #[test]
    fn test_bullish_fan_out() {
        let chart = generate_seeded(IndicatorKind::Ma, Scenario::Bullish);
        let ma5 = dense_column(&chart, "ma5");
        let ma10 = dense_column(&chart, "ma10");
        let ma20 = dense_column(&chart, "ma20");

        let rising = ma5.windows(2).filter(|w| w[1] > w[0]).count();
        assert!(rising > ma5.len() * 3 / 4);

        let later = 30..ma5.len();
        let ordered = later
            .clone()
            .filter(|&i| ma5[i] > ma10[i] && ma10[i] > ma20[i])
            .count();
        assert!(ordered * 2 > later.len());
    }

    #[test]
    fn test_bearish_averages_sit_above_price() {
        let chart = generate_seeded(IndicatorKind::Ma, Scenario::Bearish);
        let price = dense_column(&chart, "price");
        let ma60 = dense_column(&chart, "ma60");
        assert!(price.iter().zip(&ma60).all(|(p, m)| m > p));
        assert!(price[0] > price[price.len() - 1]);
    }

    #[test]
    fn test_breakout_down_keeps_averages_below_price() {
        let chart = generate_seeded(IndicatorKind::Ma, Scenario::BreakoutDown);
        let price = dense_column(&chart, "price");
        let ma60 = dense_column(&chart, "ma60");
        assert!(price.iter().zip(&ma60).all(|(p, m)| m < p));
    }

    #[test]
    fn test_refuse_death_never_crosses() {
        let chart = generate_seeded(IndicatorKind::Ma, Scenario::RefuseDeath);
        let ma5 = dense_column(&chart, "ma5");
        let ma10 = dense_column(&chart, "ma10");
        assert!(ma5.iter().zip(&ma10).all(|(fast, slow)| fast > slow));
        // 回调区间内两线最接近
        let gap_in_dip = ma5[40] - ma10[40];
        let gap_before = ma5[10] - ma10[10];
        assert!(gap_in_dip < gap_before);
    }

    #[test]
    fn test_consolidation_pins_slow_averages() {
        let chart = generate_seeded(IndicatorKind::Ma, Scenario::Consolidation);
        assert!(dense_column(&chart, "ma20").iter().all(|v| *v == 50.0));
        assert!(dense_column(&chart, "ma60").iter().all(|v| *v == 50.0));
    }
}
