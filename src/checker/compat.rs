use super::types::{Type, TypeName};

/// `compatible(left, right)` (§4.2, G): decides whether one type may stand
/// in for another. Used for struct fields, call arguments, operator
/// operands, and union-arm selection.
pub fn compatible(left: &Type, right: &Type) -> bool {
    compatible_ordered(left, right, true)
}

fn compatible_ordered(left: &Type, right: &Type, allow_swap: bool) -> bool {
    if let TypeName::Instantiated(..) = left.name() {
        if left.name() == right.name() {
            return true;
        }
    }

    if left == right {
        return true;
    }

    // Only the bare `ptr` primitive coerces to `int`/`str`; a `ptr[T]`
    // produced by `&expr` (`Type::new_ptr_for`) is a distinct, unrelated
    // type and must not match here.
    if left.name() == &bare_ptr_name() {
        if right.name().head() == "int" || right.name().head() == "str" {
            return true;
        }
    }

    if allow_swap {
        return compatible_ordered(right, left, false);
    }

    false
}

fn bare_ptr_name() -> TypeName {
    TypeName::Simple("ptr".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_types_are_compatible() {
        let int_a = Type::primitive("int");
        assert!(compatible(&int_a, &int_a));
    }

    #[test]
    fn bare_ptr_is_compatible_with_int_and_str_symmetrically() {
        let ptr = Type::primitive("ptr");
        let int_ = Type::primitive("int");
        let str_ = Type::primitive("str");

        assert!(compatible(&ptr, &int_));
        assert!(compatible(&int_, &ptr));
        assert!(compatible(&ptr, &str_));
        assert!(compatible(&str_, &ptr));
    }

    #[test]
    fn pointer_instantiation_does_not_coerce_to_int_or_str() {
        let referent = Type::primitive("int");
        let ptr_to_int = Type::new_ptr_for(&referent);
        let int_ = Type::primitive("int");
        let str_ = Type::primitive("str");

        assert!(!compatible(&ptr_to_int, &int_));
        assert!(!compatible(&int_, &ptr_to_int));
        assert!(!compatible(&ptr_to_int, &str_));
    }

    #[test]
    fn unrelated_primitives_are_not_compatible() {
        let float_ = Type::primitive("float");
        let bool_ = Type::primitive("bool");
        assert!(!compatible(&float_, &bool_));
    }

    #[test]
    fn compatibility_is_symmetric() {
        let a = Type::primitive("int");
        let b = Type::primitive("float");
        assert_eq!(compatible(&a, &b), compatible(&b, &a));
    }
}
