use crate::ast::{Class, Property};
use tracing::debug;

const SETTER_PREFIX: &str = "set";

/// Pair `setX`/`getX` methods into properties.
///
/// A setter candidate starts with `set` and returns void. Its getter is the
/// first declared method named like the setter with the leading `s`
/// replaced by `g`. Candidates whose property name was already taken by an
/// earlier setter stay regular methods. No type compatibility between the
/// pair is checked.
pub fn infer_properties(class: &mut Class) {
    for write in 0..class.methods.len() {
        let setter = &class.methods[write];
        if !is_setter_candidate(&setter.name) || !setter.signature.is_void() {
            continue;
        }

        let name = property_name(&setter.name);
        if class.find_property(&name).is_some() {
            debug!(setter = %setter.name, property = %name, "property already inferred");
            continue;
        }

        let getter = format!("g{}", &setter.name[1..]);
        let Some(read) = class.methods.iter().position(|m| m.name == getter) else {
            continue;
        };

        class.methods[write].is_property = true;
        class.methods[read].is_property = true;
        debug!(property = %name, "inferred property");
        class.properties.push(Property { name, read, write });
    }
}

fn is_setter_candidate(name: &str) -> bool {
    name.len() > SETTER_PREFIX.len() && name.starts_with(SETTER_PREFIX)
}

/// `setFoo` -> `foo`
fn property_name(setter: &str) -> String {
    let rest = &setter[SETTER_PREFIX.len()..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
