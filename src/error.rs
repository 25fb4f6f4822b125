//! Error types for configuration resolution, step parsing and format patterns.

/// Errors raised while resolving a chart request into render props.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("formData has no vizType and no chart kind was given")]
    MissingVizType,

    #[error("unknown chart kind: {0}")]
    UnknownChartKind(String),

    #[error("invalid options for {kind}: {source}")]
    InvalidOptions {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} expects row data in payload.data")]
    ExpectedRows { kind: &'static str },
}

/// Errors raised by `steps::parse_step_config` and friends.
#[derive(Debug, thiserror::Error)]
pub enum StepParseError {
    #[error("step configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("step configuration has no labels")]
    NoLabels,
}

/// Errors raised when a number format pattern cannot be parsed.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid number format: {0:?}")]
    InvalidPattern(String),

    #[error("unsupported format type {ty:?} in {pattern:?}")]
    UnsupportedType { pattern: String, ty: char },
}
