//! Interfaces to the collaborators the parser depends on.
//!
//! How introspection text is produced (which executable, which platform) and
//! how skip patterns are written are decided by the implementors, not here.

use thiserror::Error;

/// Failure to obtain introspection text for a class
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed ({status}): {stderr}")]
    ExitStatus {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("output of '{command}' is not valid UTF-8")]
    InvalidUtf8 { command: String },

    #[error("no introspection text available for '{classname}'")]
    NotFound { classname: String },

    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Produces raw introspection text for a class
pub trait DescriptorSource {
    fn fetch(&self, classname: &str, classpath: &str) -> Result<String, ExtractionError>;
}

/// Decides whether a member should be left out of the model entirely
pub trait SkipPredicate {
    fn matches(&self, name: &str) -> bool;
}

impl<F> SkipPredicate for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, name: &str) -> bool {
        self(name)
    }
}

/// A source backed by text that was captured ahead of time
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    entries: Vec<(String, String)>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, classname: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.push((classname.into(), text.into()));
        self
    }
}

impl DescriptorSource for StaticSource {
    fn fetch(&self, classname: &str, _classpath: &str) -> Result<String, ExtractionError> {
        self.entries
            .iter()
            .find(|(name, _)| name == classname)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| ExtractionError::NotFound {
                classname: classname.to_string(),
            })
    }
}
