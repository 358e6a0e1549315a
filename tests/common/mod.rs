//! Test utilities shared by the tablescrape integration tests

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use kodegen_tools_tablescrape::{MarkupSource, Prompt, TableScrapeResult};
use std::collections::VecDeque;
use std::path::Path;

/// Wrap `body` in a minimal HTML document
#[allow(dead_code)]
pub fn html_page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Tables</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// A page with a header table, a headerless table and a ragged table
#[allow(dead_code)]
pub fn three_table_page() -> String {
    html_page(
        r#"
    <table id="scores">
        <thead><tr><th>Team</th><th>Points</th></tr></thead>
        <tbody>
            <tr><td>Lions</td><td>1,204</td></tr>
            <tr><td>Tigers</td><td>987</td></tr>
        </tbody>
    </table>
    <table id="plain">
        <tr><td>a</td><td>b</td><td>c</td></tr>
    </table>
    <table id="ragged">
        <tr><th>x</th><th>y</th><th>z</th></tr>
        <tr><td>1</td></tr>
        <tr><td>2</td><td>3</td></tr>
    </table>
    "#,
    )
}

/// Every sheet of a workbook on disk, in workbook order
#[allow(dead_code)]
pub fn read_workbook(path: &Path) -> Vec<(String, Range<Data>)> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook should open");
    let names = workbook.sheet_names();
    names
        .into_iter()
        .map(|name| {
            let range = workbook
                .worksheet_range(&name)
                .expect("sheet should be readable");
            (name, range)
        })
        .collect()
}

/// Cell at absolute 0-based `(row, col)` as text
#[allow(dead_code)]
pub fn text_at(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Cell at absolute 0-based `(row, col)` as a number
#[allow(dead_code)]
pub fn number_at(range: &Range<Data>, row: u32, col: u32) -> Option<f64> {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        _ => None,
    }
}

/// Whether the cell at absolute `(row, col)` holds nothing
#[allow(dead_code)]
pub fn is_blank(range: &Range<Data>, row: u32, col: u32) -> bool {
    matches!(range.get_value((row, col)), None | Some(Data::Empty))
}

/// Prompt that replays canned answers and records everything shown
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    pub asked: Vec<String>,
    pub told: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    /// Answers are handed out in order; after the last one input is closed
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| Some((*a).to_string())).collect(),
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    async fn ask(&mut self, message: &str) -> TableScrapeResult<Option<String>> {
        self.asked.push(message.to_string());
        Ok(self.answers.pop_front().flatten())
    }

    fn tell(&mut self, message: &str) {
        self.told.push(message.to_string());
    }
}

/// Markup source serving a fixed document
#[allow(dead_code)]
pub struct StaticMarkup(pub String);

impl MarkupSource for StaticMarkup {
    async fn capture_markup(&self) -> TableScrapeResult<String> {
        Ok(self.0.clone())
    }
}
