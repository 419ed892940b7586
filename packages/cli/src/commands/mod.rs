pub mod generate;
pub mod init;
pub mod inspect;

pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};

use crate::config::Config;
use crate::error::{ClassError, ClassFailure, GenerateError};
use crate::javap::{DirectorySource, JavapSource};
use crate::skip::RegexSkip;
use clap::Args;
use colored::Colorize;
use javastub_parser::{Class, DescriptorSource, Parser};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Where classes come from and which members to keep
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// JDK directory that contains bin/javap (overrides config)
    #[arg(long, env = "JAVA_HOME")]
    pub java_home: Option<PathBuf>,

    /// The CLASSPATH handed to javap (overrides config)
    #[arg(long)]
    pub class_path: Option<String>,

    /// Class to process; can be supplied multiple times
    #[arg(long = "class", value_name = "CLASSNAME", required = true)]
    pub classes: Vec<String>,

    /// Regular expression for method names to skip (overrides config)
    #[arg(long)]
    pub skip: Option<String>,

    /// Read saved `<classname>.javap` listings from this directory instead of running javap
    #[arg(long, value_name = "DIR")]
    pub from_dir: Option<PathBuf>,
}

/// Source settings with config file values applied
pub struct ResolvedSource {
    pub source: Box<dyn DescriptorSource>,
    pub parser: Parser,
    pub classpath: String,
    pub classes: Vec<String>,
}

impl SourceArgs {
    pub fn resolve(self, config: &Config) -> Result<ResolvedSource, GenerateError> {
        if self.classes.is_empty() {
            return Err(GenerateError::NoClasses);
        }

        // The skip pattern is checked before anything else is looked up
        let parser = match self.skip.or_else(|| config.skip.clone()) {
            Some(pattern) => Parser::with_skip(Box::new(RegexSkip::new(&pattern)?)),
            None => Parser::new(),
        };

        let offline = self.from_dir.is_some();
        let source: Box<dyn DescriptorSource> = match self.from_dir {
            Some(dir) => Box::new(DirectorySource::new(dir)),
            None => {
                let java_home = self
                    .java_home
                    .or_else(|| config.java_home.clone())
                    .ok_or(GenerateError::MissingJavaHome)?;
                Box::new(JavapSource::from_java_home(&java_home)?)
            }
        };

        // Saved listings were resolved already, so no classpath is needed
        let classpath = match self.class_path.or_else(|| config.class_path.clone()) {
            Some(classpath) => classpath,
            None if offline => String::new(),
            None => return Err(GenerateError::MissingClassPath),
        };

        Ok(ResolvedSource {
            source,
            parser,
            classpath,
            classes: self.classes,
        })
    }
}

/// Fetch and parse every class in order.
///
/// A class that cannot be extracted or parsed is recorded as a failure and
/// skipped; the remaining classes are still processed.
pub fn collect_classes(
    source: &dyn DescriptorSource,
    parser: &Parser,
    classes: &[String],
    classpath: &str,
) -> (Vec<Class>, Vec<ClassFailure>) {
    let mut parsed = Vec::new();
    let mut failures = Vec::new();

    for classname in classes {
        debug!(%classname, "processing");
        let result = source
            .fetch(classname, classpath)
            .map_err(ClassError::from)
            .and_then(|text| parser.parse(classname, &text).map_err(ClassError::from));

        match result {
            Ok(class) => {
                debug!("{}", class);
                parsed.push(class);
            }
            Err(error) => {
                warn!(%classname, %error, "skipping class");
                failures.push(ClassFailure {
                    classname: classname.clone(),
                    error,
                });
            }
        }
    }

    (parsed, failures)
}

/// Print one line per skipped class to stderr
pub fn report_failures(failures: &[ClassFailure]) {
    for failure in failures {
        eprintln!(
            "  {} {} - {}",
            "✗".red(),
            failure.classname,
            failure.error.report().red()
        );
    }
}
