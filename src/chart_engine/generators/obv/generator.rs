use super::config::{ObvConfig, OBV_DEFAULT_LENGTH};
use super::trajectory::obv_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::project_fields;
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::Scenario;
use polars::prelude::*;
use rand::rngs::StdRng;

const OBV_FIELDS: [FieldName; 2] = [FieldName::Price, FieldName::Obv];

pub struct ObvGenerator;

impl ScenarioGenerator for ObvGenerator {
    fn default_length(&self) -> usize {
        OBV_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        &OBV_FIELDS
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = ObvConfig::for_scenario(scenario);
        let lazy_df = obv_trajectory(&config, length, rng).into_lazy()?;
        project_fields(lazy_df, self.fields())
    }
}

#[cfg(test)]
mod tests {
    use crate::chart_engine::utils::test_helpers::{dense_column, generate_seeded};
    use crate::types::{IndicatorKind, Scenario};

    #[test]
    fn test_price_rises_monotonically() {
        for scenario in [Scenario::Bullish, Scenario::DivergenceBear, Scenario::Squeeze] {
            let price = dense_column(&generate_seeded(IndicatorKind::Obv, scenario), "price");
            assert!(price.windows(2).all(|w| w[1] > w[0]));
        }
    }

    #[test]
    fn test_obv_direction_by_scenario() {
        let bullish = dense_column(&generate_seeded(IndicatorKind::Obv, Scenario::Bullish), "obv");
        assert!(bullish.windows(2).all(|w| w[1] - w[0] >= 50.0));

        let divergence = dense_column(
            &generate_seeded(IndicatorKind::Obv, Scenario::DivergenceBear),
            "obv",
        );
        assert!(divergence.windows(2).all(|w| w[1] < w[0]));

        let flat = dense_column(&generate_seeded(IndicatorKind::Obv, Scenario::Squeeze), "obv");
        assert!(flat.iter().all(|v| *v == 1000.0));
    }
}
