use super::PuzzleParseError;

/// Reads the instance encoding into its lists of integers.
///
/// The instance is a JSON list of integer lists, e.g. `[[3], [11, 21, 3, 0], [31, 5]]`, in which
/// lines starting with `%` are comments.
pub(super) fn parse_lists(source: &str) -> Result<Vec<Vec<i64>>, PuzzleParseError> {
    let content = source
        .lines()
        .filter(|line| !line.trim_start().starts_with('%'))
        .collect::<Vec<_>>()
        .join("\n");

    if content.trim().is_empty() {
        return Err(PuzzleParseError::MissingHeader);
    }

    Ok(serde_json::from_str(&content)?)
}
