use regex::Regex;
use std::sync::LazyLock;

// Optional sign, digits with or without `,` thousands groups, optional
// fraction and exponent
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$")
        .expect("BUG: hardcoded number regex is statically valid")
});

/// Value of one data cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Classify already-normalized cell text
    ///
    /// Blank text is [`CellValue::Empty`]. Text that reads as a plain decimal
    /// number (thousands separators allowed) is [`CellValue::Number`]. Words
    /// such as `inf` or `NaN` stay text.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }

        if NUMBER.is_match(text) {
            let digits = text.replace(',', "");
            if let Ok(value) = digits.parse::<f64>()
                && value.is_finite()
            {
                return Self::Number(value);
            }
        }

        Self::Text(text.to_string())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}
