//! Column label cleanup

use std::collections::HashMap;

/// Make header rows usable as column labels
///
/// With a single header row, blank labels become `Unnamed: {i}` and repeats get
/// `.1`, `.2`, … suffixes so every column has a distinct name. With stacked
/// header rows, blanks become `Unnamed: {i}_level_{level}` and repeats are kept
/// since a spanning group label repeats by nature.
pub(super) fn normalize_header(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    match rows.len() {
        0 => rows,
        1 => rows.into_iter().map(dedupe_labels).collect(),
        _ => rows
            .into_iter()
            .enumerate()
            .map(|(level, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(i, label)| {
                        if label.is_empty() {
                            format!("Unnamed: {i}_level_{level}")
                        } else {
                            label
                        }
                    })
                    .collect()
            })
            .collect(),
    }
}

fn dedupe_labels(row: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    row.into_iter()
        .enumerate()
        .map(|(i, label)| {
            let label = if label.is_empty() {
                format!("Unnamed: {i}")
            } else {
                label
            };

            let count = seen.entry(label.clone()).or_insert(0);
            let out = if *count == 0 {
                label
            } else {
                format!("{label}.{count}")
            };
            *count += 1;
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_header;

    fn row(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn single_row_fills_blanks_and_dedupes() {
        let out = normalize_header(vec![row(&["Name", "", "Score", "Score", "Score"])]);
        assert_eq!(
            out,
            vec![row(&["Name", "Unnamed: 1", "Score", "Score.1", "Score.2"])]
        );
    }

    #[test]
    fn stacked_rows_keep_repeats() {
        let out = normalize_header(vec![row(&["", "Q1", "Q1"]), row(&["Team", "W", "L"])]);
        assert_eq!(
            out,
            vec![row(&["Unnamed: 0_level_0", "Q1", "Q1"]), row(&["Team", "W", "L"])]
        );
    }
}
