use super::config::{AvlConfig, AVL_DEFAULT_LENGTH};
use super::expr::avl_expr;
use super::trajectory::avl_trajectory;
use crate::chart_engine::generators::registry::ScenarioGenerator;
use crate::chart_engine::generators::utils::project_fields;
use crate::chart_engine::utils::FieldName;
use crate::error::ViewerError;
use crate::types::Scenario;
use polars::prelude::*;
use rand::rngs::StdRng;

const AVL_FIELDS: [FieldName; 2] = [FieldName::Price, FieldName::Avl];

pub struct AvlGenerator;

impl ScenarioGenerator for AvlGenerator {
    fn default_length(&self) -> usize {
        AVL_DEFAULT_LENGTH
    }

    fn fields(&self) -> &'static [FieldName] {
        &AVL_FIELDS
    }

    fn generate(
        &self,
        scenario: Scenario,
        length: usize,
        _rng: &mut StdRng,
    ) -> Result<DataFrame, ViewerError> {
        let config = AvlConfig::for_scenario(scenario);
        let lazy_df = avl_trajectory(&config, length)
            .into_lazy()?
            .with_column(avl_expr(&config));
        project_fields(lazy_df, self.fields())
    }
}

#[cfg(test)]
mod tests {
    use crate::chart_engine::utils::test_helpers::{dense_column, generate_seeded};
    use crate::types::{IndicatorKind, Scenario};

    #[test]
    fn test_support_dips_once_at_25() {
        let bullish = dense_column(&generate_seeded(IndicatorKind::Avl, Scenario::Bullish), "price");
        let support = dense_column(&generate_seeded(IndicatorKind::Avl, Scenario::Support), "price");
        for i in 0..25 {
            assert_eq!(bullish[i], support[i]);
        }
        for i in 25..bullish.len() {
            assert!((bullish[i] - support[i] - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_line_side_follows_direction() {
        let up = generate_seeded(IndicatorKind::Avl, Scenario::Bullish);
        let down = generate_seeded(IndicatorKind::Avl, Scenario::Bearish);
        let (p, a) = (dense_column(&up, "price"), dense_column(&up, "avl"));
        assert!(p.iter().zip(&a).all(|(p, a)| a < p));
        let (p, a) = (dense_column(&down, "price"), dense_column(&down, "avl"));
        assert!(p.iter().zip(&a).all(|(p, a)| a > p));
    }
}
