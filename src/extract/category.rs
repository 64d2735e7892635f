//! Category block clean-up

/// Separator between category hierarchy segments
pub const CATEGORY_SEPARATOR: &str = " → ";

/// Lines starting with these are narrative text, not category names
const NARRATIVE_PREFIXES: &[&str] = &["The ", "On ", "In ", "From ", "Since "];

/// Lines this short (in characters) are labels or noise
const MIN_LINE_CHARS: usize = 5;

/// Reduces the text between the "Category" label and the next label to a
/// category path of at most two segments
///
/// # Examples
///
/// ```
/// use shadow_fleet_scraper::extract::category_path;
///
/// let block = "Shadow fleet\nTanker risk\nThe vessel is...";
/// assert_eq!(category_path(block), "Shadow fleet → Tanker risk");
/// ```
pub fn category_path(block: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for line in block.trim().split('\n').map(str::trim) {
        if line.chars().count() <= MIN_LINE_CHARS {
            continue;
        }
        if NARRATIVE_PREFIXES.iter().any(|p| line.starts_with(p)) {
            continue;
        }
        if !segments.contains(&line) {
            segments.push(line);
        }
    }

    segments.truncate(2);
    segments.join(CATEGORY_SEPARATOR)
}
