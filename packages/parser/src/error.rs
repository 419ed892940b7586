//! Error types for descriptor decoding and javap output parsing

use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// A descriptor that falls outside the `(<args>)<return>` grammar.
///
/// Every variant carries the byte offset into the descriptor where decoding
/// gave up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("empty descriptor")]
    Empty,

    #[error("expected '(' at {pos}")]
    MissingOpenParen { pos: usize },

    #[error("missing ')' after argument list starting at {pos}")]
    MissingCloseParen { pos: usize },

    #[error("object type at {pos} is not terminated by ';'")]
    UnterminatedObject { pos: usize },

    #[error("object type at {pos} has an empty name")]
    EmptyObjectName { pos: usize },

    #[error("array prefix at {pos} has no element type")]
    DanglingArray { pos: usize },

    #[error("missing return type at {pos}")]
    MissingReturn { pos: usize },

    #[error("object return type at {pos} has no 'L' marker")]
    ReturnWithoutMarker { pos: usize },

    #[error("unexpected trailing input at {pos}")]
    TrailingInput { pos: usize },
}

impl DescriptorError {
    pub fn pos(&self) -> usize {
        match self {
            DescriptorError::Empty => 0,
            DescriptorError::MissingOpenParen { pos }
            | DescriptorError::MissingCloseParen { pos }
            | DescriptorError::UnterminatedObject { pos }
            | DescriptorError::EmptyObjectName { pos }
            | DescriptorError::DanglingArray { pos }
            | DescriptorError::MissingReturn { pos }
            | DescriptorError::ReturnWithoutMarker { pos }
            | DescriptorError::TrailingInput { pos } => *pos,
        }
    }

    /// Pretty-print the error against the descriptor it came from using ariadne
    #[cfg(feature = "pretty-errors")]
    pub fn render(&self, descriptor: &str) -> String {
        use ariadne::{Color, Label, Report, ReportKind, Source};

        if descriptor.is_empty() {
            return format!("malformed descriptor: {}", self);
        }

        let start = self.pos().min(descriptor.len().saturating_sub(1));
        let end = (start + 1).min(descriptor.len()).max(start);
        let name = "descriptor";

        let report = Report::build(ReportKind::Error, name, start)
            .with_message("malformed descriptor")
            .with_label(
                Label::new((name, start..end))
                    .with_color(Color::Red)
                    .with_message(self.to_string()),
            )
            .finish();

        let mut output = Vec::new();
        if report
            .write((name, Source::from(descriptor)), &mut output)
            .is_err()
        {
            return format!("malformed descriptor '{}': {}", descriptor, self);
        }

        String::from_utf8(output).unwrap_or_else(|_| self.to_string())
    }

    /// Plain one-line rendering when pretty errors are disabled
    #[cfg(not(feature = "pretty-errors"))]
    pub fn render(&self, descriptor: &str) -> String {
        format!("malformed descriptor '{}': {}", descriptor, self)
    }
}

/// Errors raised while turning javap text into a [`crate::ast::Class`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("declaration '{line}' has no matching descriptor line")]
    UnpairedLine { line: String },

    #[error("expected a descriptor line after '{declaration}', found '{found}'")]
    MissingDescriptor { declaration: String, found: String },

    #[error("declaration line '{line}' has no member name")]
    EmptyDeclaration { line: String },

    #[error("malformed descriptor '{descriptor}' for member '{member}': {source}")]
    MalformedDescriptor {
        member: String,
        descriptor: String,
        #[source]
        source: DescriptorError,
    },
}

impl ParseError {
    pub fn unpaired_line(line: impl Into<String>) -> Self {
        Self::UnpairedLine { line: line.into() }
    }

    pub fn missing_descriptor(declaration: impl Into<String>, found: impl Into<String>) -> Self {
        Self::MissingDescriptor {
            declaration: declaration.into(),
            found: found.into(),
        }
    }

    pub fn empty_declaration(line: impl Into<String>) -> Self {
        Self::EmptyDeclaration { line: line.into() }
    }

    pub fn malformed_descriptor(
        member: impl Into<String>,
        descriptor: impl Into<String>,
        source: DescriptorError,
    ) -> Self {
        Self::MalformedDescriptor {
            member: member.into(),
            descriptor: descriptor.into(),
            source,
        }
    }

    /// A multi-line report suitable for terminal output
    pub fn report(&self) -> String {
        match self {
            ParseError::MalformedDescriptor {
                member,
                descriptor,
                source,
            } => format!("in member '{}':\n{}", member, source.render(descriptor)),
            other => other.to_string(),
        }
    }
}
