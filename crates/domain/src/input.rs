// crates/domain/src/input.rs
use script_lines_shared_kernel::{DomainError, DomainResult};

const QUOTES: &[char] = &['"', '\''];

/// Split the multi-line ID box into request items.
///
/// Blank lines are skipped; every value is trimmed of whitespace and of surrounding
/// quote characters so that paths pasted from a file manager work as-is.
pub fn parse_entries(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| line.trim().trim_matches(QUOTES).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`parse_entries`], but an input with no entries is a validation error.
pub fn require_entries(raw: &str) -> DomainResult<Vec<String>> {
    let entries = parse_entries(raw);
    if entries.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    Ok(entries)
}

/// Scripts are sharded by their first two characters, so shorter ids cannot be fetched.
pub fn validate_script_id(id: &str) -> DomainResult<()> {
    if id.chars().count() < 2 {
        return Err(DomainError::InvalidScriptId {
            id: id.to_string(),
            reason: "script IDs are at least two characters long".to_string(),
        });
    }
    Ok(())
}
