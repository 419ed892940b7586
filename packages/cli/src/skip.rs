use crate::error::GenerateError;
use javastub_parser::SkipPredicate;
use regex::Regex;

/// Skips members whose whole name matches a regular expression
#[derive(Debug, Clone)]
pub struct RegexSkip {
    regex: Regex,
}

impl RegexSkip {
    pub fn new(pattern: &str) -> Result<Self, GenerateError> {
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| {
            GenerateError::InvalidSkipPredicate {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self { regex })
    }
}

impl SkipPredicate for RegexSkip {
    fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}
