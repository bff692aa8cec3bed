/// Returns true when `input` looks like an email address: it contains an
/// `'@'` and a `'.'`, anywhere, in any order.
///
/// Deliberately permissive. There is no positional, length or domain
/// checking; `"@."` passes. The check never panics, and the empty string is
/// simply invalid.
pub fn is_likely_email(input: &str) -> bool {
    input.contains('@') && input.contains('.')
}
