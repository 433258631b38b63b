pub mod content;
pub mod indicator_kind;
pub mod scenario;
pub mod settings;

pub use self::content::{Module, SectionBody, SectionContent, SectionType};
pub use self::indicator_kind::IndicatorKind;
pub use self::scenario::{Scenario, ScenarioCategory};
pub use self::settings::{GenerateConfig, RenderConfig, ViewerConfig};
