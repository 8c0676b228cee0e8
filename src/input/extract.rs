//! Extraction of top-level JSON arrays from raw input text
//!
//! The input may carry several independent operation batches, each a JSON
//! array, separated by arbitrary whitespace or newlines. This scanner
//! slices them apart without parsing; each slice is deserialized
//! independently so one bad batch cannot take down its siblings.

use crate::error::InputError;

/// Extract every top-level `[...]` JSON array from the input.
///
/// The depth counter is string-aware: brackets inside quoted strings do
/// not affect nesting, and escaped quotes do not terminate a string.
/// Unmatched brackets are a structural error for the whole input.
pub fn extract_json_arrays(input: &str) -> Result<Vec<&str>, InputError> {
    let bytes = input.as_bytes();
    let mut arrays = Vec::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let Some(offset) = input[cursor..].find('[') else {
            break;
        };
        let start = cursor + offset;

        let mut depth = 0usize;
        let mut in_string = false;
        let mut end = start;
        let mut closed = false;

        while end < bytes.len() {
            let b = bytes[end];
            if b == b'"' && (end == 0 || bytes[end - 1] != b'\\') {
                in_string = !in_string;
            }
            if !in_string {
                if b == b'[' {
                    depth += 1;
                } else if b == b']' {
                    depth -= 1;
                    if depth == 0 {
                        end += 1;
                        closed = true;
                        break;
                    }
                }
            }
            end += 1;
        }

        if !closed {
            return Err(InputError::UnmatchedBrackets);
        }

        arrays.push(&input[start..end]);
        cursor = end;
    }

    Ok(arrays)
}
