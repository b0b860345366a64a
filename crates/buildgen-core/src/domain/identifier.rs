//! Identifier rules shared by field naming and resource key derivation.

use crate::domain::error::DomainError;

/// Whether `s` can be emitted as a constant or accessor name.
///
/// Starts with a letter or `_`, continues with letters, digits or `_`.
/// A lone `_` is reserved in most target languages and is rejected.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if s == "_" {
        return false;
    }
    (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Replace every hyphen with an underscore. Nothing else changes.
pub fn normalize_hyphens(s: &str) -> String {
    s.replace('-', "_")
}

/// Rewrite `s` into an identifier, or `None` when nothing usable remains.
///
/// Valid input comes back unchanged. Otherwise a leading character that
/// cannot start an identifier gets a `_` prefix, every other illegal
/// character becomes `_`, and runs of `_` collapse to one.
pub fn to_identifier(s: &str) -> Option<String> {
    if is_identifier(s) {
        return Some(s.to_owned());
    }

    let mut out = String::with_capacity(s.len() + 1);
    if s.chars().next().is_some_and(|c| !(c.is_alphabetic() || c == '_')) {
        out.push('_');
    }
    for c in s.chars() {
        let c = if c.is_alphanumeric() { c } else { '_' };
        if !(c == '_' && out.ends_with('_')) {
            out.push(c);
        }
    }

    is_identifier(&out).then_some(out)
}

/// Fail with `InvalidIdentifier` unless `identifier` passes [`is_identifier`].
pub fn ensure_identifier(identifier: &str, origin: impl FnOnce() -> String) -> Result<(), DomainError> {
    if is_identifier(identifier) {
        Ok(())
    } else {
        Err(DomainError::InvalidIdentifier {
            identifier: identifier.to_owned(),
            origin: origin(),
        })
    }
}
