use super::error::{FlowError, FlowResult};

pub const MAX_SHORT_CODE_LEN: usize = 3;

/// Lowercase first letter of each word, at most three.
///
/// `"HR PTO App"` suggests `"hpa"`.
pub fn suggest_short_code(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_lowercase)
        .take(MAX_SHORT_CODE_LEN)
        .collect()
}

pub fn validate_short_code(code: &str) -> FlowResult<String> {
    let code = code.trim();
    let len = code.chars().count();

    if len == 0 || len > MAX_SHORT_CODE_LEN {
        return Err(FlowError::InvalidShortCode(code.to_string()));
    }

    Ok(code.to_lowercase())
}
