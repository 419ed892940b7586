use javastub_parser::Class;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};

/// Shape of the generated wrapper classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Plain Python classes holding the Java object in `self.jobject`
    #[default]
    Plain,
    /// Subclasses of `JavaObject`, preceded by its import
    Extended,
}

/// Options for Python stub generation
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub profile: Profile,
    /// The classpath the classes were resolved against, cited in extended output
    pub classpath: Option<String>,
}

impl CompileOptions {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            classpath: None,
        }
    }

    pub fn with_classpath(mut self, classpath: impl Into<String>) -> Self {
        self.classpath = Some(classpath.into());
        self
    }
}

/// Accumulates the text for one class
pub struct CompilerContext<'a> {
    buffer: RefCell<String>,
    indent_level: Cell<usize>,
    pub class: &'a Class,
    pub options: &'a CompileOptions,
}

impl<'a> CompilerContext<'a> {
    pub fn new(class: &'a Class, options: &'a CompileOptions) -> Self {
        Self {
            buffer: RefCell::new(String::new()),
            indent_level: Cell::new(0),
            class,
            options,
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    /// Adds an indented line; indentation follows the current level
    pub fn add_line(&self, text: &str) {
        let indent = "    ".repeat(self.indent_level.get());
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(&indent);
        buffer.push_str(text);
        buffer.push('\n');
    }

    /// A docstring block at the current indentation
    pub fn add_docstring(&self, lines: &[String]) {
        self.add_line("\"\"\"");
        for line in lines {
            self.add_line(line);
        }
        self.add_line("\"\"\"");
    }

    /// The whitespace-only separator line that follows each member
    pub fn add_separator(&self) {
        self.add_line("");
    }

    pub fn indent(&self) {
        self.indent_level.set(self.indent_level.get() + 1);
    }

    pub fn dedent(&self) {
        let level = self.indent_level.get();
        if level > 0 {
            self.indent_level.set(level - 1);
        }
    }

    pub fn into_output(self) -> String {
        self.buffer.into_inner()
    }
}
