use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Wrong positional-argument arity. Answered with usage text, not a failure status.
    #[error("unrecognized invocation")]
    Usage,

    #[error("Cutout request failed: {0}")]
    ServiceError(#[from] reqwest::Error),

    #[error("Cutout image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Batch file error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cutout service returned an empty response for survey '{survey}'")]
    EmptyCutout { survey: String },

    #[error("Invalid {field} '{value}': expected degrees as a floating point number")]
    CoordinateError { field: String, value: String },

    #[error("Batch file line {line}: {reason}")]
    BatchRowError { line: usize, reason: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ChartError {
    /// Process exit code for this error. Usage problems exit 0 (the usage
    /// text is the answer), bad input exits 2, runtime failures exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChartError::Usage => 0,
            ChartError::CoordinateError { .. }
            | ChartError::BatchRowError { .. }
            | ChartError::CsvError(_)
            | ChartError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
