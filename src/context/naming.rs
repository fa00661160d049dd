//! Naming utilities for generated artifacts
//!
//! All transforms are pure and total over any non-empty table name.

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase};

/// Strip the first matching prefix from a table name.
/// e.g. "sys_post" with prefixes ["sys_"] -> "post"
pub fn strip_prefix<'a>(table_name: &'a str, prefixes: &[String]) -> &'a str {
    for prefix in prefixes {
        if let Some(stripped) = table_name.strip_prefix(prefix.as_str()) {
            if !stripped.is_empty() {
                return stripped;
            }
        }
    }
    table_name
}

/// Convert a business name to a class name (PascalCase)
pub fn to_class_name(business_name: &str) -> String {
    business_name.to_pascal_case()
}

/// Convert a business name to a variable name (camelCase)
pub fn to_var_name(business_name: &str) -> String {
    business_name.to_lower_camel_case()
}

/// Convert a business name to a path segment (kebab-case)
pub fn to_kebab_name(business_name: &str) -> String {
    business_name.to_kebab_case()
}
