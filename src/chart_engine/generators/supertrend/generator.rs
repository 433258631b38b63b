use super::config::{SuperTrendConfig, SUPERTREND_DEFAULT_LENGTH};
use super::trajectory::supertrend_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::{project_fields, regime_stop_exprs};
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::Scenario;
use polars::prelude::*;
use rand::rngs::StdRng;

const SUPERTREND_FIELDS: [FieldName; 3] = [FieldName::Price, FieldName::StUp, FieldName::StDown];

pub struct SuperTrendGenerator;

impl ScenarioGenerator for SuperTrendGenerator {
    fn default_length(&self) -> usize {
        SUPERTREND_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        &SUPERTREND_FIELDS
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = SuperTrendConfig::for_scenario(scenario);
        let (st_up, st_down) = regime_stop_exprs(
            &config.regime_up_col,
            config.stop_offset,
            FieldName::StUp,
            FieldName::StDown,
        );
        let lazy_df = supertrend_trajectory(&config, length, rng)
            .into_lazy()?
            .with_columns([st_up, st_down]);
        project_fields(lazy_df, self.fields())
    }
}
