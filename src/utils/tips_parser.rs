//! Parsing of generated study tips.

use regex::Regex;
use std::sync::LazyLock;

/// Numbering and bullet characters stripped from the start of each tip.
static LEADING_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9.*•\- ]+").unwrap());

/// Lines this short or shorter are headings or noise, not tips.
const MIN_LINE_CHARS: usize = 10;

/// Fewer parsed tips than this triggers padding with generic ones.
pub const MIN_TIPS: usize = 3;

/// Upper bound on returned tips.
pub const MAX_TIPS: usize = 5;

/// Extracts tips from a completion, one candidate per line.
///
/// Lines are trimmed, short lines dropped and leading numbering or bullets
/// removed. When fewer than [`MIN_TIPS`] survive, three generic tips for
/// `course_title` are appended. At most [`MAX_TIPS`] are returned.
pub fn parse_tips(content: &str, course_title: &str) -> Vec<String> {
    let mut tips: Vec<String> = content
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_LINE_CHARS)
        .map(|line| LEADING_MARKERS.replace(line, "").trim().to_string())
        .filter(|tip| !tip.is_empty())
        .collect();

    if tips.len() < MIN_TIPS {
        tips.extend([
            format!("Review {course_title} materials weekly"),
            "Practice with real-world examples".to_string(),
            "Form study groups for better understanding".to_string(),
        ]);
    }

    tips.truncate(MAX_TIPS);
    tips
}
