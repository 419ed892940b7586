//! Parsing of `javap -s -public` output into a model of a class's public
//! surface, including descriptor decoding and getter/setter pairing.

pub mod ast;
pub mod descriptor;
pub mod error;
pub mod parser;
pub mod properties;
pub mod source;

pub use ast::{Class, Field, Method, Property, Signature, TypeName};
pub use descriptor::{decode_field_descriptor, decode_method_descriptor};
pub use error::{DescriptorError, ParseError, ParseResult};
pub use parser::{parse, Parser};
pub use properties::infer_properties;
pub use source::{DescriptorSource, ExtractionError, SkipPredicate, StaticSource};
