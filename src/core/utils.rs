//! String transformation utilities for code generation

use once_cell::sync::Lazy;
use regex::Regex;

static PATH_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}/]+)\}").expect("valid path parameter pattern"));

/// Converts a string to snake_case format.
///
/// Handles camelCase, PascalCase, kebab-case and space-separated input.
///
/// # Examples
/// ```
/// use servergen::core::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("findPetsByStatus"), "find_pets_by_status");
/// assert_eq!(to_snake_case("find-pets-by-status"), "find_pets_by_status");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else if !result.is_empty() && !result.ends_with('_') {
            // Any separator collapses into a single underscore
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a string to UpperCamelCase, used for Go type and method names.
///
/// # Examples
/// ```
/// use servergen::core::utils::to_proper_case;
///
/// assert_eq!(to_proper_case("cat"), "Cat");
/// assert_eq!(to_proper_case("pet-store"), "PetStore");
/// ```
pub fn to_proper_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Rewrites OpenAPI path parameters (`/pets/{id}`) into colon style (`/pets/:id`),
/// the form expected by gin, echo, iris and fiber routers.
pub fn to_colon_params(path: &str) -> String {
    PATH_PARAM.replace_all(path, ":$1").into_owned()
}

/// Turns an operation id into an exported Go identifier.
///
/// Ids that are already identifiers only get their first letter uppercased, so
/// acronyms survive (`getHTTPStatus` -> `GetHTTPStatus`). Anything else is
/// proper-cased (`get-cat-status` -> `GetCatStatus`). Returns `None` when no
/// identifier starting with a letter can be built.
pub fn to_go_identifier(s: &str) -> Option<String> {
    let mut chars = s.chars();
    let first = chars.next()?;

    if first.is_alphabetic() && chars.all(|c| c.is_alphanumeric() || c == '_') {
        let mut rest = s.chars();
        rest.next();
        return Some(first.to_uppercase().chain(rest).collect());
    }

    let proper = to_proper_case(s);
    if proper.starts_with(char::is_alphabetic) {
        Some(proper)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("findPetsByStatus"), "find_pets_by_status");
        assert_eq!(to_snake_case("FindPetsByStatus"), "find_pets_by_status");
        assert_eq!(to_snake_case("find-pets-by-status"), "find_pets_by_status");
        assert_eq!(to_snake_case("find_pets_by_status"), "find_pets_by_status");
        assert_eq!(to_snake_case("get HTTP Response"), "get_http_response");
        assert_eq!(to_snake_case("/pets/{id}"), "pets_id");
    }

    #[test]
    fn test_to_proper_case() {
        assert_eq!(to_proper_case("find_pets_by_status"), "FindPetsByStatus");
        assert_eq!(to_proper_case("findPetsByStatus"), "FindPetsByStatus");
        assert_eq!(to_proper_case("FIND_PETS_BY_STATUS"), "FindPetsByStatus");
        assert_eq!(to_proper_case("cat"), "Cat");
        assert_eq!(to_proper_case(""), "");
    }

    #[test]
    fn test_to_colon_params() {
        assert_eq!(to_colon_params("/cat"), "/cat");
        assert_eq!(to_colon_params("/pets/{id}"), "/pets/:id");
        assert_eq!(
            to_colon_params("/owners/{ownerId}/pets/{petId}"),
            "/owners/:ownerId/pets/:petId"
        );
    }

    #[test]
    fn test_to_go_identifier() {
        assert_eq!(to_go_identifier("GetCatStatus").as_deref(), Some("GetCatStatus"));
        assert_eq!(to_go_identifier("getCatStatus").as_deref(), Some("GetCatStatus"));
        assert_eq!(to_go_identifier("getHTTPStatus").as_deref(), Some("GetHTTPStatus"));
        assert_eq!(to_go_identifier("get-cat-status").as_deref(), Some("GetCatStatus"));
        assert_eq!(to_go_identifier("pets.list").as_deref(), Some("PetsList"));
        assert_eq!(to_go_identifier("list_pets").as_deref(), Some("List_pets"));
        assert_eq!(to_go_identifier("123"), None);
        assert_eq!(to_go_identifier("!!!"), None);
        assert_eq!(to_go_identifier(""), None);
    }
}
