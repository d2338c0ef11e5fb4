//! Comma-separated list splitting for env-supplied values.

/// Split a comma-separated string into trimmed, non-empty tokens in source
/// order.
///
/// Absent or empty input yields an empty vec; there is no failure path.
pub fn csv_to_tokens(text: Option<&str>) -> Vec<String> {
    let Some(raw) = text else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stray_commas_produce_no_blank_tokens() {
        assert_eq!(csv_to_tokens(Some("a,,b,")), vec!["a", "b"]);
        assert_eq!(csv_to_tokens(Some(", ,")), Vec::<String>::new());
    }
}
