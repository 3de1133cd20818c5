use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Quantitative,
    Logical,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Quantitative => "Quantitative",
            Category::Logical => "Logical",
        }
    }

    /// Heading shown above the topic menu.
    pub fn menu_title(&self) -> &'static str {
        match self {
            Category::Quantitative => "Aptitude Topics",
            Category::Logical => "Reasoning Topics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub category: String,
    pub topic: String,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
    pub explanation: Option<String>,
}

pub const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

impl Question {
    pub fn option_text(&self, letter: &str) -> Option<&str> {
        match letter {
            "A" => Some(&self.option_a),
            "B" => Some(&self.option_b),
            "C" => Some(&self.option_c),
            "D" => Some(&self.option_d),
            _ => None,
        }
    }

    /// (letter, text) pairs in display order.
    pub fn options(&self) -> Vec<(&'static str, &str)> {
        OPTION_LETTERS
            .iter()
            .filter_map(|letter| self.option_text(letter).map(|text| (*letter, text)))
            .collect()
    }
}
