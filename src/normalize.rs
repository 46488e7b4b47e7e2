/// Trim surrounding whitespace and upper-case, yielding the characters the
/// engine compares.
///
/// Upper-casing can expand a character (`ß` becomes `SS`), so offsets
/// reported by the engine index into this sequence, not the raw input.
pub fn normalize(input: &str) -> Vec<char> {
    input.trim().chars().flat_map(char::to_uppercase).collect()
}
