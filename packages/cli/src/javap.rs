//! Descriptor sources backed by the JDK's `javap` tool or by saved listings.

use crate::error::GenerateError;
use javastub_parser::{DescriptorSource, ExtractionError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// File extension of saved `javap -s -public` listings
pub const LISTING_EXTENSION: &str = "javap";

/// Runs `javap -s -public -cp <classpath> <classname>`
#[derive(Debug, Clone)]
pub struct JavapSource {
    javap: PathBuf,
}

impl JavapSource {
    /// Locate `bin/javap` (`bin/javap.exe` on Windows) below a JDK home
    pub fn from_java_home(java_home: &Path) -> Result<Self, GenerateError> {
        if !java_home.exists() {
            return Err(GenerateError::JavaHome {
                path: java_home.to_path_buf(),
                reason: "does not exist".to_string(),
            });
        }
        if !java_home.is_dir() {
            return Err(GenerateError::JavaHome {
                path: java_home.to_path_buf(),
                reason: "is not a directory".to_string(),
            });
        }

        let binary = if cfg!(windows) { "javap.exe" } else { "javap" };
        let javap = java_home.join("bin").join(binary);
        if !javap.is_file() {
            return Err(GenerateError::JavaHome {
                path: java_home.to_path_buf(),
                reason: format!("javap binary does not exist: {}", javap.display()),
            });
        }

        Ok(Self { javap })
    }

    pub fn executable(&self) -> &Path {
        &self.javap
    }

    fn command(&self, classname: &str, classpath: &str) -> Command {
        let mut cmd = Command::new(self.executable());
        cmd.args(["-s", "-public", "-cp", classpath, classname]);
        cmd
    }
}

impl DescriptorSource for JavapSource {
    fn fetch(&self, classname: &str, classpath: &str) -> Result<String, ExtractionError> {
        let mut cmd = self.command(classname, classpath);
        let command = format!("{:?}", cmd);
        debug!(%command, "running javap");

        let output = cmd.output().map_err(|source| ExtractionError::Spawn {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(ExtractionError::ExitStatus {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ExtractionError::InvalidUtf8 { command })
    }
}

/// Reads `<dir>/<classname>.javap` listings captured earlier
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn listing_path(&self, classname: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", classname, LISTING_EXTENSION))
    }
}

impl DescriptorSource for DirectorySource {
    fn fetch(&self, classname: &str, _classpath: &str) -> Result<String, ExtractionError> {
        let path = self.listing_path(classname);
        if !path.is_file() {
            return Err(ExtractionError::NotFound {
                classname: classname.to_string(),
            });
        }
        std::fs::read_to_string(&path).map_err(|source| ExtractionError::Read {
            path: path.display().to_string(),
            source,
        })
    }
}
