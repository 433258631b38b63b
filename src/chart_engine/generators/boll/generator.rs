use super::config::{BollConfig, BOLL_DEFAULT_LENGTH};
use super::expr::boll_exprs;
use super::trajectory::boll_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::project_fields;
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::Scenario;
use polars::prelude::*;
use rand::rngs::StdRng;

const BOLL_FIELDS: [FieldName; 3] = [FieldName::Price, FieldName::Upper, FieldName::Lower];

pub struct BollGenerator;

impl ScenarioGenerator for BollGenerator {
    fn default_length(&self) -> usize {
        BOLL_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        &BOLL_FIELDS
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        _rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = BollConfig::for_scenario(scenario);
        let (upper, lower) = boll_exprs(&config);
        let lazy_df = boll_trajectory(&config, length)
            .into_lazy()?
            .with_columns([upper, lower]);
        project_fields(lazy_df, self.fields())
    }
}

#[cfg(test)]
mod tests {
    use crate::chart_engine::utils::test_helpers::{dense_column, generate_seeded, mean};
    use crate::types::{ConceptChart, IndicatorKind, Scenario};

    fn band_width(chart: &ConceptChart) -> Vec<f64> {
        let upper = dense_column(chart, "upper");
        let lower = dense_column(chart, "lower");
        upper.iter().zip(&lower).map(|(u, l)| u - l).collect()
    }

    #[test]
    fn test_squeeze_is_narrower_than_ride_upper() {
        let squeeze = mean(&band_width(&generate_seeded(
            IndicatorKind::Boll,
            Scenario::Squeeze,
        )));
        let ride = mean(&band_width(&generate_seeded(
            IndicatorKind::Boll,
            Scenario::RideUpper,
        )));
        assert!(squeeze * 1.5 < ride, "squeeze={squeeze} ride={ride}");
    }

    #[test]
    fn test_ride_upper_pins_price_to_upper_band() {
        let chart = generate_seeded(IndicatorKind::Boll, Scenario::RideUpper);
        let price = dense_column(&chart, "price");
        let upper = dense_column(&chart, "upper");
        assert!(price
            .iter()
            .zip(&upper)
            .all(|(p, u)| (u - p - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_band_contains_price() {
        for scenario in [Scenario::Squeeze, Scenario::BreakoutUp, Scenario::Bearish] {
            let chart = generate_seeded(IndicatorKind::Boll, scenario);
            let price = dense_column(&chart, "price");
            let upper = dense_column(&chart, "upper");
            let lower = dense_column(&chart, "lower");
            for i in 0..price.len() {
                assert!(lower[i] < price[i] && price[i] < upper[i]);
            }
        }
    }
}
