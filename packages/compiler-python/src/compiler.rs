use crate::context::{CompileOptions, CompilerContext, Profile};
use javastub_parser::{Class, Method};

/// Import required by classes generated with [`Profile::Extended`]
const EXTENDED_IMPORT: &str = "from weka.core.classes import JavaObject";

/// Python keywords that are valid Java identifiers
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "async", "await", "def", "del", "elif", "except",
    "from", "global", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "with",
    "yield",
];

/// Header emitted once before the first class of a run
pub fn compile_preamble(options: &CompileOptions) -> Option<String> {
    match options.profile {
        Profile::Plain => None,
        Profile::Extended => Some(format!("{}\n\n\n", EXTENDED_IMPORT)),
    }
}

/// Compile several classes into one module, emitting the preamble only
/// ahead of the first class
pub fn compile_classes<'a, I>(classes: I, options: &CompileOptions) -> String
where
    I: IntoIterator<Item = &'a Class>,
{
    let mut output = String::new();
    let mut first = true;
    for class in classes {
        if first {
            if let Some(preamble) = compile_preamble(options) {
                output.push_str(&preamble);
            }
            first = false;
        }
        output.push_str(&compile_class(class, options));
    }
    output
}

/// Compile one class into a Python stub fragment
pub fn compile_class(class: &Class, options: &CompileOptions) -> String {
    let ctx = CompilerContext::new(class, options);

    compile_header(&ctx);
    ctx.indent();
    compile_class_doc(&ctx);
    compile_constructor(&ctx);

    for method in &class.methods {
        if method.is_constructor || method.is_property || method.is_static {
            continue;
        }
        compile_method(method, &ctx);
    }

    for property in &class.properties {
        compile_property(
            &property.name,
            class.property_read(property),
            class.property_write(property),
            &ctx,
        );
    }

    ctx.dedent();
    ctx.into_output()
}

/// Turns a Java camel case name into lower_underscore.
///
/// Every uppercase ASCII letter is lowercased and prefixed with `_`,
/// including a leading one: `getFoo` -> `get_foo`, `URL` -> `_u_r_l`.
pub fn python_name(java_name: &str) -> String {
    let mut result = String::with_capacity(java_name.len() + 4);
    for c in java_name.chars() {
        if c.is_ascii_uppercase() {
            result.push('_');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// [`python_name`] with a trailing `_` appended to Python keywords
pub fn python_identifier(java_name: &str) -> String {
    let name = python_name(java_name);
    if PYTHON_KEYWORDS.contains(&name.as_str()) {
        format!("{}_", name)
    } else {
        name
    }
}

fn compile_header(ctx: &CompilerContext) {
    let base = match ctx.options.profile {
        Profile::Plain => "Object",
        Profile::Extended => "JavaObject",
    };
    ctx.add_line(&format!("class {}({}):", ctx.class.simple_name(), base));
}

fn compile_class_doc(ctx: &CompilerContext) {
    let mut lines = vec![format!("classname: {}", ctx.class.name)];
    if ctx.options.profile == Profile::Extended {
        if let Some(classpath) = &ctx.options.classpath {
            lines.push(format!("classpath: {}", classpath));
        }
    }
    ctx.add_docstring(&lines);
    ctx.add_separator();
}

fn compile_constructor(ctx: &CompilerContext) {
    ctx.add_line("def __init__(self, jobject):");
    ctx.indent();
    match ctx.options.profile {
        Profile::Plain => ctx.add_line("self.jobject = jobject"),
        Profile::Extended => ctx.add_line(&format!(
            "super({}, self).__init__(jobject)",
            ctx.class.simple_name()
        )),
    }
    ctx.add_separator();
    ctx.dedent();
}

fn method_doc(method: &Method) -> String {
    format!("method: {}{}", method.name, method.signature)
}

fn compile_method(method: &Method, ctx: &CompilerContext) {
    let mut params = vec!["self".to_string()];
    params.extend((0..method.signature.arg_types.len()).map(|i| format!("arg{}", i)));

    ctx.add_line(&format!(
        "def {}({}):",
        python_identifier(&method.name),
        params.join(", ")
    ));
    ctx.indent();
    ctx.add_docstring(&[method_doc(method)]);
    ctx.add_line("pass");
    ctx.add_separator();
    ctx.dedent();
}

fn compile_property(name: &str, read: &Method, write: &Method, ctx: &CompilerContext) {
    let py_name = python_identifier(name);

    ctx.add_line("@property");
    ctx.add_line(&format!("def {}(self):", py_name));
    ctx.indent();
    ctx.add_docstring(&[method_doc(read)]);
    ctx.add_line("return None");
    ctx.add_separator();
    ctx.dedent();

    ctx.add_line(&format!("@{}.setter", py_name));
    ctx.add_line(&format!("def {}(self, value):", py_name));
    ctx.indent();
    ctx.add_docstring(&[method_doc(write)]);
    ctx.add_line("pass");
    ctx.add_separator();
    ctx.dedent();
}
