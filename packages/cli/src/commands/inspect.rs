use super::{collect_classes, report_failures, SourceArgs};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: InspectFormat,
}

/// Print the parsed model of each class instead of generating code
pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let resolved = args.source.resolve(&config)?;

    let (classes, failures) = collect_classes(
        resolved.source.as_ref(),
        &resolved.parser,
        &resolved.classes,
        &resolved.classpath,
    );
    report_failures(&failures);

    match args.format {
        InspectFormat::Text => {
            for class in &classes {
                print!("{}", class);
            }
        }
        InspectFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&classes)?);
        }
    }

    Ok(())
}
