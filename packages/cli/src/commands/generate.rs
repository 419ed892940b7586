use super::{collect_classes, report_failures, SourceArgs};
use crate::config::Config;
use crate::error::GenerateError;
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use javastub_compiler_python::{compile_classes, CompileOptions, Profile};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Emission profile as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    /// Plain classes wrapping the Java object
    Plain,
    /// JavaObject subclasses with the JavaObject import
    Extended,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Plain => Profile::Plain,
            ProfileArg::Extended => Profile::Extended,
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Python file to write to; outputs to stdout if not specified
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Append to the output file instead of replacing it
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Shape of the generated classes (overrides config)
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Shorthand for --profile extended
    #[arg(long, conflicts_with = "profile")]
    pub pww: bool,
}

impl GenerateArgs {
    fn resolve_profile(&self, config: &Config) -> Profile {
        if self.pww {
            Profile::Extended
        } else {
            self.profile.map(Profile::from).unwrap_or(config.profile)
        }
    }
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let profile = args.resolve_profile(&config);
    let resolved = args.source.resolve(&config)?;

    let (classes, failures) = collect_classes(
        resolved.source.as_ref(),
        &resolved.parser,
        &resolved.classes,
        &resolved.classpath,
    );
    report_failures(&failures);

    let mut options = CompileOptions::new(profile);
    if !resolved.classpath.is_empty() {
        options = options.with_classpath(resolved.classpath.as_str());
    }
    let code = compile_classes(&classes, &options);

    info!(
        generated = classes.len(),
        skipped = failures.len(),
        "generation finished"
    );

    write_output(&code, args.output.as_deref(), args.append)?;

    if let Some(path) = &args.output {
        eprintln!(
            "{} Wrote {} classes to {}",
            "✓".green(),
            classes.len(),
            path.display()
        );
    }
    if !failures.is_empty() {
        eprintln!(
            "{} Skipped {} of {} classes",
            "⚠️".yellow(),
            failures.len(),
            resolved.classes.len()
        );
    }

    Ok(())
}

/// Deliver the generated module, followed by a newline, to stdout or a file
pub fn write_output(code: &str, output: Option<&Path>, append: bool) -> Result<(), GenerateError> {
    let Some(path) = output else {
        println!("{}", code);
        return Ok(());
    };

    info!(path = %path.display(), append, "writing output");
    let failure = |source: std::io::Error| GenerateError::OutputWriteFailure {
        path: path.to_path_buf(),
        append,
        source,
    };

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(failure)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(code.as_bytes()).map_err(failure)?;
    writer.write_all(b"\n").map_err(failure)?;
    writer.flush().map_err(failure)?;
    Ok(())
}
