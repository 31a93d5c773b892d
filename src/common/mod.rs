use std::result;

pub type Result<T, E = String> = result::Result<T, E>;

/// True if the string is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
