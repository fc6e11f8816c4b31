// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Derivation of generated identifiers from icon file names.
//!
//! Identifiers produced by this module contain only ASCII alphanumeric
//! characters and always start with an uppercase letter, making them valid
//! symbol names in the generated sources and portable file names.

use std::collections::HashMap;

/// Prefix applied when the converted name would otherwise be empty or start
/// with a digit.
const IDENTIFIER_PREFIX: &str = "Icon";

/// Converts an icon name into a PascalCase identifier.
///
/// Tokens are delimited by `-`, `_` and whitespace. The first character of
/// each token is uppercased and the remainder is kept verbatim. Any other
/// non-alphanumeric character is dropped without starting a new token.
///
/// # Examples
///
/// ```
/// use iconsmith::to_pascal_case;
///
/// assert_eq!(to_pascal_case("arrow-left_02",), "ArrowLeft02");
/// assert_eq!(to_pascal_case("3d-view",), "Icon3dView");
/// ```
pub fn to_pascal_case(name: &str,) -> String
{
    let mut identifier = String::with_capacity(name.len() + IDENTIFIER_PREFIX.len(),);
    let mut token_start = true;

    for candidate in name.chars() {
        match candidate {
            '-' | '_' => token_start = true,
            _ if candidate.is_whitespace() => token_start = true,
            _ if candidate.is_ascii_alphanumeric() => {
                if token_start {
                    identifier.push(candidate.to_ascii_uppercase(),);
                } else {
                    identifier.push(candidate,);
                }
                token_start = false;
            }
            _ => {}
        }
    }

    if identifier.is_empty() || identifier.starts_with(|ch: char| ch.is_ascii_digit(),) {
        identifier.insert_str(0, IDENTIFIER_PREFIX,);
    }

    identifier
}

/// Two distinct icon names converted to the same identifier.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct IdentifierCollision
{
    /// Identifier shared by both names.
    pub identifier: String,
    /// Name that produced the identifier first.
    pub first:      String,
    /// Name that collided with it.
    pub second:     String,
}

/// Converts every name and verifies that no two distinct names share an
/// identifier.
///
/// Identifiers are returned in input order. Repeating the exact same name is
/// not a collision.
///
/// # Errors
///
/// Returns the first [`IdentifierCollision`] found in input order.
pub fn assign_identifiers<'a, I,>(names: I,) -> Result<Vec<String,>, IdentifierCollision,>
where
    I: IntoIterator<Item = &'a str,>,
{
    let names = names.into_iter();
    let mut identifiers = Vec::with_capacity(names.size_hint().0,);
    let mut owners: HashMap<String, &'a str,> = HashMap::with_capacity(names.size_hint().0,);

    for name in names {
        let identifier = to_pascal_case(name,);
        if let Some(existing,) = owners.get(identifier.as_str(),)
            && *existing != name
        {
            return Err(IdentifierCollision {
                identifier,
                first: (*existing).to_owned(),
                second: name.to_owned(),
            },);
        }
        owners.insert(identifier.clone(), name,);
        identifiers.push(identifier,);
    }

    Ok(identifiers,)
}
