use crate::{compile_class, compile_classes, python_identifier, python_name, CompileOptions, Profile};
use javastub_parser::parse;

const BEAN: &str = r#"Compiled from "Bean.java"
public class demo.Bean {
  public demo.Bean();
    descriptor: ()V

  public void setFoo(java.lang.String);
    descriptor: (Ljava/lang/String;)V

  public java.lang.String getFoo();
    descriptor: ()Ljava/lang/String;

  public static demo.Bean create();
    descriptor: ()Ldemo/Bean;

  public int computeTotal(int, double[]);
    descriptor: (I[D)I

  public void reset();
    descriptor: ()V
}
"#;

#[test]
fn test_plain_class() {
    let class = parse("demo.Bean", BEAN).expect("Failed to parse");
    let result = compile_class(&class, &CompileOptions::default());

    println!("Generated code:\n{}", result);

    assert!(result.starts_with("class Bean(Object):\n"));
    assert!(result.contains("    \"\"\"\n    classname: demo.Bean\n    \"\"\"\n"));
    assert!(result.contains("    def __init__(self, jobject):\n        self.jobject = jobject\n"));
    assert!(!result.contains("JavaObject"));
    assert!(!result.contains("classpath:"));
}

#[test]
fn test_method_stubs() {
    let class = parse("demo.Bean", BEAN).expect("Failed to parse");
    let result = compile_class(&class, &CompileOptions::default());

    assert!(result.contains("    def compute_total(self, arg0, arg1):\n"));
    assert!(result.contains("        method: computeTotal(I, D)I\n"));
    assert!(result.contains("    def reset(self):\n"));
    assert!(result.contains("        method: reset()V\n        \"\"\"\n        pass\n"));
}

#[test]
fn test_static_constructor_and_property_methods_not_stubbed() {
    let class = parse("demo.Bean", BEAN).expect("Failed to parse");
    let result = compile_class(&class, &CompileOptions::default());

    assert!(!result.contains("def create("));
    assert!(!result.contains("def set_foo("));
    assert!(!result.contains("def get_foo("));
    assert!(!result.contains("def demo"));
}

#[test]
fn test_generic_constructor_is_not_stubbed() {
    let text = "public class demo.Box<T> {\n  public <T> demo.Box(T);\n    descriptor: (Ljava/lang/Object;)V\n}\n";
    let class = parse("demo.Box", text).expect("Failed to parse");
    let result = compile_class(&class, &CompileOptions::default());

    assert!(result.starts_with("class Box(Object):\n"));
    assert!(result.contains("    def __init__(self, jobject):\n"));
    assert!(!result.contains("def demo"));
}

#[test]
fn test_property_accessors() {
    let class = parse("demo.Bean", BEAN).expect("Failed to parse");
    let result = compile_class(&class, &CompileOptions::default());

    let getter = "    @property\n    def foo(self):\n        \"\"\"\n        method: getFoo()java/lang/String\n        \"\"\"\n        return None\n";
    let setter = "    @foo.setter\n    def foo(self, value):\n        \"\"\"\n        method: setFoo(java/lang/String)V\n        \"\"\"\n        pass\n";
    assert!(result.contains(getter));
    assert!(result.contains(setter));

    // Properties follow the regular methods
    assert!(result.find("def reset").unwrap() < result.find("@property").unwrap());
}

#[test]
fn test_extended_class() {
    let class = parse("demo.Bean", BEAN).expect("Failed to parse");
    let options = CompileOptions::new(Profile::Extended).with_classpath("/opt/lib/demo.jar");
    let result = compile_class(&class, &options);

    println!("Generated code:\n{}", result);

    assert!(result.starts_with("class Bean(JavaObject):\n"));
    assert!(result.contains("    classname: demo.Bean\n    classpath: /opt/lib/demo.jar\n"));
    assert!(result.contains("        super(Bean, self).__init__(jobject)\n"));
    // The import belongs to the run, not to the class
    assert!(!result.contains("import"));
}

#[test]
fn test_preamble_emitted_once() {
    let first = parse("demo.Bean", BEAN).expect("Failed to parse");
    let second = parse("demo.Other", "public demo.Other();\ndescriptor: ()V").expect("Failed to parse");
    let options = CompileOptions::new(Profile::Extended);

    let result = compile_classes([&first, &second], &options);

    assert!(result.starts_with("from weka.core.classes import JavaObject\n\n\nclass Bean(JavaObject):\n"));
    assert_eq!(result.matches("import JavaObject").count(), 1);
    assert!(result.contains("class Other(JavaObject):\n"));
    assert!(result.find("class Bean").unwrap() < result.find("class Other").unwrap());
}

#[test]
fn test_plain_run_has_no_preamble() {
    let class = parse("demo.Bean", BEAN).expect("Failed to parse");
    let result = compile_classes([&class], &CompileOptions::default());
    assert!(result.starts_with("class Bean(Object):\n"));
}

#[test]
fn test_empty_run() {
    let result = compile_classes(std::iter::empty(), &CompileOptions::new(Profile::Extended));
    assert!(result.is_empty());
}

#[test]
fn test_emission_is_deterministic() {
    let class = parse("demo.Bean", BEAN).expect("Failed to parse");
    for profile in [Profile::Plain, Profile::Extended] {
        let options = CompileOptions::new(profile).with_classpath("lib");
        assert_eq!(compile_class(&class, &options), compile_class(&class, &options));
    }
}

#[test]
fn test_python_name() {
    assert_eq!(python_name("getFoo"), "get_foo");
    assert_eq!(python_name("toString"), "to_string");
    assert_eq!(python_name("value"), "value");
    assert_eq!(python_name("parseURL"), "parse_u_r_l");
    // A leading capital produces a leading separator
    assert_eq!(python_name("Foo"), "_foo");
}

#[test]
fn test_python_identifier_escapes_keywords() {
    assert_eq!(python_identifier("from"), "from_");
    assert_eq!(python_identifier("with"), "with_");
    assert_eq!(python_identifier("withValue"), "with_value");
}

#[test]
fn test_profile_serde_names() {
    assert_eq!(serde_json::to_string(&Profile::Extended).unwrap(), "\"extended\"");
    let profile: Profile = serde_json::from_str("\"plain\"").unwrap();
    assert_eq!(profile, Profile::Plain);
}
