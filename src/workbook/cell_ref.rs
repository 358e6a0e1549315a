//! A1-style cell references

/// Column letters for a 0-based column index: 0 → `A`, 25 → `Z`, 26 → `AA`
#[must_use]
pub fn column_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// 0-based column index for column letters; `None` for anything but `A-Z`
#[must_use]
pub fn column_index(name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    name.bytes().try_fold(0usize, |acc, b| {
        let b = b.to_ascii_uppercase();
        if !b.is_ascii_uppercase() {
            return None;
        }
        acc.checked_mul(26)?.checked_add(usize::from(b - b'A') + 1)
    })
    .map(|n| n - 1)
}

/// Reference for 0-based `(row, col)`: `(0, 0)` → `A1`
#[must_use]
pub fn cell_reference(row: usize, col: usize) -> String {
    format!("{}{}", column_name(col), row + 1)
}
