//! Pure byte-to-text formatting for the hex view.

/// Bytes shown per row.
pub const ROW_LENGTH: usize = 16;

/// Number of rows needed for `len` bytes.
pub fn row_count(len: usize) -> usize {
    len.div_ceil(ROW_LENGTH)
}

/// Two-digit uppercase hex cells for `bytes[start..end]`.
/// `end` is clamped to the data length.
pub fn hex_cells(bytes: &[u8], start: usize, end: usize) -> Vec<String> {
    let end = end.min(bytes.len());
    if start >= end {
        return Vec::new();
    }
    bytes[start..end].iter().map(|b| format!("{b:02X}")).collect()
}

/// Ascii cells for `bytes[start..end]`, with `\r` and `\n` shown as `.`.
/// `end` is clamped to the data length.
pub fn ascii_cells(bytes: &[u8], start: usize, end: usize) -> Vec<String> {
    let end = end.min(bytes.len());
    if start >= end {
        return Vec::new();
    }
    bytes[start..end]
        .iter()
        .map(|&b| {
            let ch = b as char;
            if ch == '\r' || ch == '\n' {
                ".".to_string()
            } else {
                ch.to_string()
            }
        })
        .collect()
}

/// Six-digit uppercase hex address of a row's first byte.
pub fn row_address(row: usize) -> String {
    format!("{:06X}", row * ROW_LENGTH)
}

/// The column header cells: `00` through `0F`.
pub fn header_cells() -> Vec<String> {
    (0..ROW_LENGTH).map(|i| format!("{i:02X}")).collect()
}
