//! Identifier helpers for widget naming.

/// Converts a widget identifier into its domain alias.
///
/// Segments separated by `-`, `_` or whitespace are capitalized and joined
/// without a separator: `checkbox` → `Checkbox`, `alert-dialog` → `AlertDialog`.
pub fn domain_name(widget: &str) -> String {
    widget
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Joins a domain alias and a type suffix, e.g. (`checkbox`, `Props`) → `CheckboxProps`.
pub fn domain_type_name(widget: &str, suffix: &str) -> String {
    let mut name = domain_name(widget);
    name.push_str(suffix);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_name_single_word() {
        assert_eq!(domain_name("checkbox"), "Checkbox");
        assert_eq!(domain_name("dialog"), "Dialog");
    }

    #[test]
    fn test_domain_name_joins_segments() {
        assert_eq!(domain_name("alert-dialog"), "AlertDialog");
        assert_eq!(domain_name("radio_group"), "RadioGroup");
        assert_eq!(domain_name("dropdown menu"), "DropdownMenu");
    }

    #[test]
    fn test_domain_name_keeps_inner_case() {
        assert_eq!(domain_name("toggleGroup"), "ToggleGroup");
    }

    #[test]
    fn test_domain_name_ignores_empty_segments() {
        assert_eq!(domain_name("--context--menu"), "ContextMenu");
        assert_eq!(domain_name(""), "");
    }

    #[test]
    fn test_domain_type_name() {
        assert_eq!(domain_type_name("checkbox", "Props"), "CheckboxProps");
        assert_eq!(domain_type_name("checkbox", "Events"), "CheckboxEvents");
    }
}
