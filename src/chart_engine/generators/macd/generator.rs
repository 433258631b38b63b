use super::config::{MacdConfig, MACD_DEFAULT_LENGTH};
use super::expr::{hist_expr, signal_expr};
use super::trajectory::macd_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::project_fields;
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::Scenario;
use polars::prelude::*;
use rand::rngs::StdRng;

const MACD_FIELDS: [FieldName; 4] = [
    FieldName::Price,
    FieldName::Macd,
    FieldName::Signal,
    FieldName::Hist,
];

pub struct MacdGenerator;

impl ScenarioGenerator for MacdGenerator {
    fn default_length(&self) -> usize {
        MACD_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        &MACD_FIELDS
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        _rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = MacdConfig::for_scenario(scenario);
        let lazy_df = macd_trajectory(&config, length)
            .into_lazy()?
            .with_column(signal_expr(&config))
            .with_column(hist_expr(&config));
        project_fields(lazy_df, self.fields())
    }
}
