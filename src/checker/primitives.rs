use std::collections::HashMap;

use once_cell::unsync::Lazy;

use super::types::Type;

/// The fixed primitive-type set (§6): `void`, `bool`, `int`, `float`,
/// `str`, `ptr`, `function`, `any`. Registered once per process and shared
/// by every module — a `Name` lookup checks this table before the module's
/// own type table (§4.1).
///
/// The checker is single-threaded cooperative (§5), so a thread-local
/// `once_cell::unsync::Lazy` table is enough; `Type` wraps an `Rc` and is
/// not `Sync`, ruling out a plain process-wide `sync::Lazy` static.
const PRIMITIVE_NAMES: [&str; 8] = [
    "void", "bool", "int", "float", "str", "ptr", "function", "any",
];

thread_local! {
    static PRIMITIVES: Lazy<HashMap<&'static str, Type>> = Lazy::new(|| {
        PRIMITIVE_NAMES
            .iter()
            .map(|name| (*name, Type::primitive(name)))
            .collect()
    });
}

/// Looks up a primitive type by name, if `name` names one.
pub fn lookup(name: &str) -> Option<Type> {
    PRIMITIVES.with(|table| table.get(name).cloned())
}

pub fn is_primitive_name(name: &str) -> bool {
    PRIMITIVE_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_singletons_within_a_thread() {
        let a = lookup("int").unwrap();
        let b = lookup("int").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_name_is_not_primitive() {
        assert!(lookup("Point").is_none());
        assert!(!is_primitive_name("Point"));
    }
}
