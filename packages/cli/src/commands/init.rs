use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::commands::generate::ProfileArg;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Classpath to record in the config
    #[arg(long)]
    pub class_path: Option<String>,

    /// JDK directory to record in the config
    #[arg(long, env = "JAVA_HOME")]
    pub java_home: Option<PathBuf>,

    /// Default emission profile
    #[arg(long, value_enum, default_value = "plain")]
    pub profile: ProfileArg,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        eprintln!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        eprintln!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config {
        java_home: args.java_home,
        class_path: args.class_path,
        skip: None,
        profile: args.profile.into(),
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)? + "\n")?;

    eprintln!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    Ok(())
}
