const WIDTH: usize = 33;

/// Escaped, truncated and padded rendering of input text for log columns.
pub fn formatter_str(c: &str) -> String {
    let s: String = c.chars().take(WIDTH).collect();
    let s = s.escape_default().to_string();
    let s = s.replace("\\\"", "\"");
    let s = s.replace("\\\'", "\'");
    let s: String = s.chars().take(WIDTH).collect();
    format!("{:<35}", "|".to_string() + &s + "|")
}
