mod compiler;
mod context;

pub use compiler::{
    compile_class, compile_classes, compile_preamble, python_identifier, python_name,
};
pub use context::{CompileOptions, CompilerContext, Profile};

#[cfg(test)]
mod tests;
