mod labels;
mod selector;

pub use labels::{
    category_for, category_for_key, chart_header, label_for_key, resolve_scenario,
    scenario_label, SIMULATION_BADGE,
};
pub use selector::{plan_for, plan_for_key, PLACEHOLDER_MESSAGE};
