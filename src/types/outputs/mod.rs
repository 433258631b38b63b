mod chart_plan;
#[cfg(feature = "python")]
mod into_py;
mod rendered;
mod samples;
mod views;

pub use chart_plan::{
    AxisDomain, AxisId, AxisSpec, ChartFamily, ChartPlan, ColorRule, ConditionalAnnotation,
    Curve, LinePosition, ReferenceLine, SeriesSpec, SeriesStyle,
};
pub use rendered::{ChartHeader, RenderedChart};
pub use samples::{ConceptChart, SamplePoint};
pub use views::{
    ChapterState, ChapterView, NavLink, SectionLayout, SectionView, SidebarEntry, SidebarView,
};
