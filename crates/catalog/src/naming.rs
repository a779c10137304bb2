//! Identifier derivation for tables and columns.
//!
//! Identifiers are split into runs each starting at an upper-case letter,
//! lower-cased and joined with `_`. Table names are pluralized by appending a
//! literal `s`, without irregular plurals: `MockData` becomes `mock_datas`.
//!
//! # Example
//! ```rust
//! use catalog::naming::{derive_column_name, derive_table_name};
//!
//! assert_eq!(derive_column_name("FloatNumber"), "float_number");
//! assert_eq!(derive_table_name("FakeStruct"), "fake_structs");
//! ```

const NAME_SEPARATOR: char = '_';
const PLURAL_SUFFIX: &str = "s";

/// Split an identifier into runs, each starting at an upper-case letter.
///
/// The first run starts at the beginning of the identifier, whatever its case.
#[must_use]
pub fn split_on_caps(ident: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (idx, ch) in ident.char_indices().skip(1) {
        if ch.is_uppercase() {
            words.push(&ident[start..idx]);
            start = idx;
        }
    }
    if start < ident.len() {
        words.push(&ident[start..]);
    }
    words
}

/// Snake-case form of a camel-case identifier.
///
/// Runs are joined with a single `_`; a run already ending in `_` is not
/// given a second one. Snake-case input is returned unchanged.
#[must_use]
pub fn sql_name_from_camel_case(ident: &str) -> String {
    let mut name = String::with_capacity(ident.len() + 4);
    for word in split_on_caps(ident) {
        if !name.is_empty() && !name.ends_with(NAME_SEPARATOR) {
            name.push(NAME_SEPARATOR);
        }
        name.extend(word.chars().flat_map(char::to_lowercase));
    }
    name
}

/// Column name for a field.
#[must_use]
pub fn derive_column_name(field_name: &str) -> String {
    sql_name_from_camel_case(field_name)
}

/// Table name for a type name.
#[must_use]
pub fn derive_table_name(type_name: &str) -> String {
    sql_name_from_camel_case(type_name) + PLURAL_SUFFIX
}

/// Bare type name from a type path: module path and generic arguments are
/// dropped, so `app::model::Wrapper<u8>` gives `Wrapper`.
#[must_use]
pub fn type_base_name(type_path: &str) -> &str {
    let without_generics = type_path
        .split_once('<')
        .map_or(type_path, |(head, _)| head);
    without_generics
        .rsplit_once("::")
        .map_or(without_generics, |(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_caps_runs() {
        assert_eq!(split_on_caps("FakeStruct"), vec!["Fake", "Struct"]);
        assert_eq!(split_on_caps("mockData"), vec!["mock", "Data"]);
        assert_eq!(split_on_caps("id"), vec!["id"]);
        assert_eq!(split_on_caps("ID"), vec!["I", "D"]);
        assert!(split_on_caps("").is_empty());
    }

    #[test]
    fn column_names() {
        assert_eq!(derive_column_name("Id"), "id");
        assert_eq!(derive_column_name("Float"), "float");
        assert_eq!(derive_column_name("CreatedAt"), "created_at");
        assert_eq!(derive_column_name("createdAt"), "created_at");
        assert_eq!(derive_column_name("created_at"), "created_at");
    }

    #[test]
    fn table_names_use_literal_plural() {
        assert_eq!(derive_table_name("FakeStruct"), "fake_structs");
        assert_eq!(derive_table_name("MockData"), "mock_datas");
        assert_eq!(derive_table_name("mockData"), "mock_datas");
        assert_eq!(derive_table_name("Address"), "addresss");
        assert_eq!(derive_table_name("User"), "users");
    }

    #[test]
    fn edge_identifiers() {
        // Empty input: no words, only the plural suffix survives.
        assert_eq!(derive_column_name(""), "");
        assert_eq!(derive_table_name(""), "s");

        // Consecutive capitals each start a run.
        assert_eq!(derive_column_name("HTTPServer"), "h_t_t_p_server");

        // Digits stay in their run.
        assert_eq!(derive_column_name("Vec2D"), "vec2_d");
        assert_eq!(derive_column_name("123"), "123");

        // No doubled separator after a run ending in `_`.
        assert_eq!(derive_column_name("My_Field"), "my_field");
        assert_eq!(derive_column_name("_Private"), "_private");
    }

    #[test]
    fn non_ascii_identifiers() {
        assert_eq!(derive_column_name("ÉtatCivil"), "état_civil");
    }

    #[test]
    fn base_name_strips_path_and_generics() {
        assert_eq!(type_base_name("app::model::MockData"), "MockData");
        assert_eq!(type_base_name("MockData"), "MockData");
        assert_eq!(
            type_base_name("app::Wrapper<alloc::string::String>"),
            "Wrapper"
        );
    }
}
