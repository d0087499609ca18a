//! Column label derivation

/// Derive a label from a field name: `first_name` becomes `First name`
pub fn make_label(field_name: &str) -> String {
    let spaced = field_name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_label() {
        assert_eq!(make_label("first_name"), "First name");
        assert_eq!(make_label("id"), "Id");
        assert_eq!(make_label("already Cased"), "Already Cased");
        assert_eq!(make_label("_private"), " private");
        assert_eq!(make_label(""), "");
    }
}
