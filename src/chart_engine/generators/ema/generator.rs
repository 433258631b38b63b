use super::config::{EmaConfig, EMA_DEFAULT_LENGTH};
use super::expr::ema_expr;
use super::trajectory::ema_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::project_fields;
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::Scenario;
use polars::prelude::*;
use rand::rngs::StdRng;

const EMA_FIELDS: [FieldName; 2] = [FieldName::Price, FieldName::Ema];

pub struct EmaGenerator;

impl ScenarioGenerator for EmaGenerator {
    fn default_length(&self) -> usize {
        EMA_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        &EMA_FIELDS
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        _rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = EmaConfig::for_scenario(scenario);
        let lazy_df = ema_trajectory(&config, length)
            .into_lazy()?
            .with_column(ema_expr(&config));
        project_fields(lazy_df, self.fields())
    }
}
