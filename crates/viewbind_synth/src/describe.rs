//! Human-readable binding descriptions for lookup failures.

use viewbind_model::MemberBinding;

/// Join descriptions as `a`, `a and b`, or `a, b, and c`.
pub fn join_descriptions<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let mut out = String::new();
            for item in init {
                out.push_str(item.as_ref());
                out.push_str(", ");
            }
            out.push_str("and ");
            out.push_str(last.as_ref());
            out
        }
    }
}

/// Describe a set of bindings, e.g. `field 'title' and method 'onTap'`.
pub fn describe(bindings: &[&dyn MemberBinding]) -> String {
    let descriptions: Vec<String> = bindings.iter().map(|b| b.description()).collect();
    join_descriptions(&descriptions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_one() {
        assert_eq!(join_descriptions(&["field 'a'"]), "field 'a'");
    }

    #[test]
    fn test_join_two() {
        assert_eq!(join_descriptions(&["field 'a'", "method 'b'"]), "field 'a' and method 'b'");
    }

    #[test]
    fn test_join_many_uses_serial_comma() {
        assert_eq!(join_descriptions(&["a", "b", "c"]), "a, b, and c");
        assert_eq!(join_descriptions(&["a", "b", "c", "d"]), "a, b, c, and d");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_descriptions::<&str>(&[]), "");
    }
}
