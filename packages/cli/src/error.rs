use javastub_parser::{ExtractionError, ParseError};
use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures; any of these stops the run
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid regular expression for skipping method names: {pattern}")]
    InvalidSkipPredicate {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Java home {}: {reason}", .path.display())]
    JavaHome { path: PathBuf, reason: String },

    #[error("No Java home given; pass --java-home or set JAVA_HOME")]
    MissingJavaHome,

    #[error("No classpath given; pass --class-path or set classPath in the config file")]
    MissingClassPath,

    #[error("No classnames provided")]
    NoClasses,

    #[error("Failed to write to '{}' (append={append}): {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        append: bool,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single class was skipped
#[derive(Error, Debug)]
pub enum ClassError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ClassError {
    /// Longer form including annotated descriptors where available
    pub fn report(&self) -> String {
        match self {
            ClassError::Extraction(e) => e.to_string(),
            ClassError::Parse(e) => e.report(),
        }
    }
}

/// A class that could not be processed
#[derive(Debug)]
pub struct ClassFailure {
    pub classname: String,
    pub error: ClassError,
}
