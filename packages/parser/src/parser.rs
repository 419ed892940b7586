use crate::ast::{Class, Field, Method};
use crate::descriptor::{decode_field_descriptor, decode_method_descriptor};
use crate::error::{ParseError, ParseResult};
use crate::properties::infer_properties;
use crate::source::SkipPredicate;
use tracing::{debug, instrument};

/// Banner javap prints before the class body
const PROVENANCE_BANNER: &str = "Compiled from";

const DESCRIPTOR_LABEL: &str = "descriptor:";

/// Modifier keywords stripped from the front of a declaration
const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "synchronized",
    "native",
    "strictfp",
    "default",
    "transient",
    "volatile",
];

/// Parse javap output for `classname` with no skip predicate
pub fn parse(classname: &str, text: &str) -> ParseResult<Class> {
    Parser::new().parse(classname, text)
}

/// Parser for `javap -s -public` output
#[derive(Default)]
pub struct Parser {
    skip: Option<Box<dyn SkipPredicate>>,
}

impl Parser {
    pub fn new() -> Self {
        Self { skip: None }
    }

    /// Members whose name matches `skip` are dropped before inference
    pub fn with_skip(skip: Box<dyn SkipPredicate>) -> Self {
        Self { skip: Some(skip) }
    }

    fn is_skipped(&self, name: &str) -> bool {
        self.skip.as_ref().map(|s| s.matches(name)).unwrap_or(false)
    }

    /// Build the model for one class and infer its properties
    #[instrument(skip(self, text))]
    pub fn parse(&self, classname: &str, text: &str) -> ParseResult<Class> {
        let mut class = self.parse_members(classname, text)?;
        infer_properties(&mut class);
        Ok(class)
    }

    /// Build the model for one class without inferring properties
    pub fn parse_members(&self, classname: &str, text: &str) -> ParseResult<Class> {
        let lines = clean_lines(text);
        let mut class = Class::new(classname);

        // Pairs are checked in order, so a listing that falls out of step
        // reports the first declaration missing its descriptor line
        for pair in lines.chunks(2) {
            let &[decl_line, desc_line] = pair else {
                return Err(ParseError::unpaired_line(pair[0].trim()));
            };
            let descriptor = descriptor_text(decl_line, desc_line)?;
            let declaration = Declaration::parse(decl_line)?;

            if self.is_skipped(&declaration.name) {
                debug!(member = %declaration.name, "skipping member");
                continue;
            }

            if declaration.is_field {
                let type_name = decode_field_descriptor(descriptor).map_err(|e| {
                    ParseError::malformed_descriptor(&declaration.name, descriptor, e)
                })?;
                class.fields.push(Field {
                    name: declaration.name,
                    type_name,
                    is_static: declaration.is_static,
                });
                continue;
            }

            let signature = decode_method_descriptor(descriptor)
                .map_err(|e| ParseError::malformed_descriptor(&declaration.name, descriptor, e))?;
            class.methods.push(Method {
                name: declaration.name,
                is_constructor: declaration.is_constructor,
                is_static: declaration.is_static,
                is_property: false,
                signature,
            });
        }

        debug!(
            methods = class.methods.len(),
            fields = class.fields.len(),
            "parsed members"
        );
        Ok(class)
    }
}

/// Drop the provenance banner, brace lines and blank lines
pub fn clean_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.contains(PROVENANCE_BANNER))
        .filter(|line| !line.contains('{') && !line.contains('}'))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn descriptor_text<'a>(decl_line: &str, desc_line: &'a str) -> ParseResult<&'a str> {
    let trimmed = desc_line.trim();
    match trimmed.strip_prefix(DESCRIPTOR_LABEL) {
        Some(rest) => Ok(rest.trim()),
        None => Err(ParseError::missing_descriptor(decl_line.trim(), trimmed)),
    }
}

/// The parts of a declaration line the model cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub is_constructor: bool,
    pub is_static: bool,
    pub is_field: bool,
}

impl Declaration {
    /// Parse one declaration line, e.g. `public static int max(int, int);`
    pub fn parse(line: &str) -> ParseResult<Self> {
        let (head, is_field) = match line.find('(') {
            Some(idx) => (&line[..idx], false),
            None => (line.trim().trim_end_matches(';'), true),
        };

        let mut is_static = false;
        let mut rest = head.trim();
        while let Some((word, tail)) = split_first_word(rest) {
            if !MODIFIERS.contains(&word) {
                break;
            }
            if word == "static" {
                is_static = true;
            }
            rest = tail;
        }

        rest = strip_type_parameters(rest);
        if rest.is_empty() {
            return Err(ParseError::empty_declaration(line.trim()));
        }

        // A constructor is the only member without a declared type
        if !is_field && !rest.contains(char::is_whitespace) {
            return Ok(Self {
                name: rest.to_string(),
                is_constructor: true,
                is_static,
                is_field,
            });
        }

        let name = rest
            .split_whitespace()
            .last()
            .ok_or_else(|| ParseError::empty_declaration(line.trim()))?;

        Ok(Self {
            name: name.to_string(),
            is_constructor: false,
            is_static,
            is_field,
        })
    }
}

/// Drop a leading `<...>` type parameter list such as `<T extends Comparable<T>>`
fn strip_type_parameters(text: &str) -> &str {
    if !text.starts_with('<') {
        return text;
    }
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return text[idx + 1..].trim_start();
                }
            }
            _ => {}
        }
    }
    text
}

fn split_first_word(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    match text.find(char::is_whitespace) {
        Some(idx) => Some((&text[..idx], text[idx..].trim_start())),
        None => Some((text, "")),
    }
}
