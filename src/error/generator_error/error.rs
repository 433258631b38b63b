use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Unknown indicator kind '{0}'")]
    UnknownIndicator(String),

    #[error("Unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("No generator registered for indicator '{0}'")]
    NotRegistered(String),

    /// 生成结果的列与该指标声明的字段不一致
    #[error("Generator '{kind}' produced columns {found:?}, expected {expected:?}")]
    SchemaMismatch {
        kind: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Generator '{kind}' produced {actual} rows, expected {expected}")]
    LengthMismatch {
        kind: String,
        actual: usize,
        expected: usize,
    },
}
