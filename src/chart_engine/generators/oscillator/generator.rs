use super::config::{OscillatorConfig, OSCILLATOR_DEFAULT_LENGTH};
use super::expr::oscillator_exprs;
use super::trajectory::oscillator_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::project_fields;
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::{IndicatorKind, Scenario};
use polars::prelude::*;
use rand::rngs::StdRng;

const SINGLE_LINE_FIELDS: [FieldName; 1] = [FieldName::Val];
const KDJ_FIELDS: [FieldName; 3] = [FieldName::K, FieldName::D, FieldName::J];

/// rsi / wr / stochrsi / kdj 共用的生成器，按 kind 决定值域与输出线
pub struct OscillatorGenerator {
    kind: IndicatorKind,
}

impl OscillatorGenerator {
    pub fn new(kind: IndicatorKind) -> Self {
        Self { kind }
    }
}

impl ScenarioGenerator for OscillatorGenerator {
    fn default_length(&self) -> usize {
        OSCILLATOR_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        if self.kind == IndicatorKind::Kdj {
            &KDJ_FIELDS
        } else {
            &SINGLE_LINE_FIELDS
        }
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        _rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = OscillatorConfig::for_scenario(self.kind, scenario);
        let lazy_df = oscillator_trajectory(&config, length)
            .into_lazy()?
            .with_columns(oscillator_exprs(&config));
        project_fields(lazy_df, self.fields())
    }
}

#[cfg(test)]
mod tests {
    use crate::chart_engine::utils::test_helpers::{dense_column, generate_seeded, mean};
    use crate::types::{IndicatorKind, Scenario};

    #[test]
    fn test_values_stay_in_domain_for_every_scenario() {
        for scenario in Scenario::ALL {
            for kind in [IndicatorKind::Rsi, IndicatorKind::StochRsi] {
                let val = dense_column(&generate_seeded(kind, scenario), "val");
                assert!(val.iter().all(|v| (0.0..=100.0).contains(v)), "{kind}/{scenario}");
            }
            let wr = dense_column(&generate_seeded(IndicatorKind::Wr, scenario), "val");
            assert!(wr.iter().all(|v| (-100.0..=0.0).contains(v)), "wr/{scenario}");

            let kdj = generate_seeded(IndicatorKind::Kdj, scenario);
            for line in ["k", "d", "j"] {
                let values = dense_column(&kdj, line);
                assert!(values.iter().all(|v| (0.0..=100.0).contains(v)), "kdj.{line}/{scenario}");
            }
        }
    }

    #[test]
    fn test_wr_overbought_sits_near_zero() {
        let overbought = mean(&dense_column(
            &generate_seeded(IndicatorKind::Wr, Scenario::Overbought),
            "val",
        ));
        let oversold = mean(&dense_column(
            &generate_seeded(IndicatorKind::Wr, Scenario::Oversold),
            "val",
        ));
        assert!(overbought > -20.0);
        assert!(oversold < -80.0);
    }

    #[test]
    fn test_kdj_offsets_inside_domain() {
        let chart = generate_seeded(IndicatorKind::Kdj, Scenario::Consolidation);
        let k = dense_column(&chart, "k");
        let d = dense_column(&chart, "d");
        let j = dense_column(&chart, "j");
        for i in 0..k.len() {
            assert!((k[i] - d[i] - 5.0).abs() < 1e-9);
            assert!((j[i] - k[i] - 5.0).abs() < 1e-9);
        }
    }
}
