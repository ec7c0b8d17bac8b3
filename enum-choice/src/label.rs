//! Member labels.

use crate::value::Value;

/// Derives a label from a member name: every `_` becomes a space, then each run of letters is
/// title-cased (first letter upper, the rest lower). `DARK_RED` becomes `Dark Red`.
///
/// Runs are split only by non-letters, so `DarkRed` becomes `Darkred` and `ITEM_2ND` becomes
/// `Item 2Nd`. Derived enums use their own word splitting on variant identifiers instead.
pub fn default_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c };
        let cased = c.is_uppercase() || c.is_lowercase();
        if !cased {
            label.push(c);
        } else if in_word {
            label.extend(c.to_lowercase());
        } else {
            label.extend(c.to_uppercase());
        }
        in_word = cased;
    }
    label
}

/// Picks the label of a member: a truthy companion value is used in its string form, otherwise
/// the label is derived from the name.
pub fn resolve_label(name: &str, companion: Option<&Value>) -> String {
    match companion {
        Some(companion) if companion.is_truthy() => companion.to_string(),
        _ => default_label(name),
    }
}
