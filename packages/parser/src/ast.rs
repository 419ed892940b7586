use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded descriptor type.
///
/// Array dimensions are not retained: `[I` and `[[I` both decode to an
/// argument named `I` with `array` set. Only the fact that a `[` prefix was
/// present survives decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    /// Primitive code (`I`, `Z`, ...) or binary name (`java/lang/String`)
    pub name: String,
    /// Whether the token carried an array prefix
    #[serde(default)]
    pub array: bool,
}

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            array: false,
        }
    }

    pub fn array(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            array: true,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A method descriptor together with its decoded argument and return types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The descriptor exactly as it appeared, e.g. `(Ljava/lang/String;)V`
    pub raw: String,
    pub arg_types: Vec<TypeName>,
    /// `None` for `V`
    pub return_type: Option<TypeName>,
}

impl Signature {
    pub fn is_void(&self) -> bool {
        self.return_type.is_none()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<&str> = self.arg_types.iter().map(|t| t.name.as_str()).collect();
        write!(f, "({})", args.join(", "))?;
        match &self.return_type {
            Some(ret) => write!(f, "{}", ret),
            None => f.write_str("V"),
        }
    }
}

/// A public method or constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub is_constructor: bool,
    pub is_static: bool,
    /// Set by property inference when this method backs a property
    pub is_property: bool,
    pub signature: Signature,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.signature)?;
        if self.is_constructor {
            f.write_str(" (constructor)")?;
        }
        if self.is_static {
            f.write_str(" [static]")?;
        }
        Ok(())
    }
}

/// A public field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub type_name: TypeName,
    pub is_static: bool,
}

/// A getter/setter pair.
///
/// `read` and `write` index into the owning [`Class::methods`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub read: usize,
    pub write: usize,
}

/// The public surface of one introspected class
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Class {
    /// Fully qualified name, e.g. `java.util.ArrayList`
    pub name: String,
    pub methods: Vec<Method>,
    #[serde(default)]
    pub fields: Vec<Field>,
    pub properties: Vec<Property>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The name without its package, `java.util.ArrayList` -> `ArrayList`
    pub fn simple_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[idx + 1..],
            None => &self.name,
        }
    }

    pub fn property_read(&self, property: &Property) -> &Method {
        &self.methods[property.read]
    }

    pub fn property_write(&self, property: &Property) -> &Method {
        &self.methods[property.write]
    }

    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        if !self.methods.is_empty() {
            writeln!(f, "  Methods:")?;
            for method in &self.methods {
                writeln!(f, "    {}", method)?;
            }
        }
        if !self.fields.is_empty() {
            writeln!(f, "  Fields:")?;
            for field in &self.fields {
                write!(f, "    {}: {}", field.name, field.type_name)?;
                if field.is_static {
                    f.write_str(" [static]")?;
                }
                writeln!(f)?;
            }
        }
        if !self.properties.is_empty() {
            writeln!(f, "  Properties:")?;
            for property in &self.properties {
                writeln!(
                    f,
                    "    {}: read({}), write({})",
                    property.name,
                    self.property_read(property).name,
                    self.property_write(property).name
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn void_method(name: &str) -> Method {
        Method {
            name: name.to_string(),
            is_constructor: false,
            is_static: false,
            is_property: false,
            signature: Signature {
                raw: "()V".to_string(),
                arg_types: vec![],
                return_type: None,
            },
        }
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(Class::new("java.util.ArrayList").simple_name(), "ArrayList");
        assert_eq!(Class::new("Foo").simple_name(), "Foo");
    }

    #[test]
    fn test_signature_display() {
        let sig = Signature {
            raw: "([ILjava/lang/String;)Ljava/lang/Object;".to_string(),
            arg_types: vec![TypeName::array("I"), TypeName::new("java/lang/String")],
            return_type: Some(TypeName::new("java/lang/Object")),
        };
        assert_eq!(sig.to_string(), "(I, java/lang/String)java/lang/Object");

        let void = Signature {
            raw: "()V".to_string(),
            arg_types: vec![],
            return_type: None,
        };
        assert_eq!(void.to_string(), "()V");
    }

    #[test]
    fn test_class_display() {
        let mut class = Class::new("demo.Widget");
        let mut ctor = void_method("demo.Widget");
        ctor.is_constructor = true;
        class.methods.push(ctor);
        let mut reset = void_method("reset");
        reset.is_static = true;
        class.methods.push(reset);

        let text = class.to_string();
        assert!(text.starts_with("demo.Widget\n"));
        assert!(text.contains("    demo.Widget: ()V (constructor)\n"));
        assert!(text.contains("    reset: ()V [static]\n"));
        assert!(!text.contains("Properties:"));
    }
}
