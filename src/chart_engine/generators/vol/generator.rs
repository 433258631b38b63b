use super::config::{VolConfig, VOL_DEFAULT_LENGTH};
use super::expr::vol_expr;
use super::trajectory::vol_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::project_fields;
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::Scenario;
use polars::prelude::*;
use rand::rngs::StdRng;

const VOL_FIELDS: [FieldName; 3] = [FieldName::Price, FieldName::Vol, FieldName::IsUp];

pub struct VolGenerator;

impl ScenarioGenerator for VolGenerator {
    fn default_length(&self) -> usize {
        VOL_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        &VOL_FIELDS
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = VolConfig::for_scenario(scenario);
        let lazy_df = vol_trajectory(&config, length, rng)
            .into_lazy()?
            .with_column(vol_expr(&config));
        project_fields(lazy_df, self.fields())
    }
}

#[cfg(test)]
mod tests {
    use crate::chart_engine::utils::test_helpers::{dense_column, generate_seeded, mean};
    use crate::types::{IndicatorKind, Scenario};

    fn split_means(scenario: Scenario) -> (f64, f64) {
        let vol = dense_column(&generate_seeded(IndicatorKind::Vol, scenario), "vol");
        (mean(&vol[..=25]), mean(&vol[26..]))
    }

    #[test]
    fn test_breakout_up_spikes_volume_after_midpoint() {
        let (before, after) = split_means(Scenario::BreakoutUp);
        assert!(after > before * 2.0, "before={before} after={after}");
    }

    #[test]
    fn test_breakout_down_does_not_spike() {
        let (before, after) = split_means(Scenario::BreakoutDown);
        assert!(after < before + 150.0, "before={before} after={after}");
    }

    #[test]
    fn test_direction_after_split() {
        let up = generate_seeded(IndicatorKind::Vol, Scenario::BreakoutUp);
        let flags = up.column_bool("is_up").unwrap();
        assert!(flags[26..].iter().all(|f| *f == Some(true)));

        let down = generate_seeded(IndicatorKind::Vol, Scenario::BreakoutDown);
        let flags = down.column_bool("is_up").unwrap();
        assert!(flags[26..].iter().all(|f| *f == Some(false)));
    }
}
