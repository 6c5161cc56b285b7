//! Study tips service.

use rand::seq::IndexedRandom;
use std::sync::Arc;

use crate::domain::tips_provider::TipsProvider;
use crate::utils::tips_parser::{MAX_TIPS, parse_tips};

/// Produces study tips for a course.
///
/// Never fails: without a provider it returns canned tips, and when the
/// provider errors it samples from a fixed list of generic advice.
pub struct StudyTipsService {
    provider: Option<Arc<dyn TipsProvider>>,
}

impl StudyTipsService {
    /// Creates the service. `None` disables generation entirely.
    pub fn new(provider: Option<Arc<dyn TipsProvider>>) -> Self {
        Self { provider }
    }

    /// Returns true if a generative provider is configured.
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Returns between 3 and 5 tips for the course.
    pub async fn study_tips(&self, course_title: &str, credit_units: i64) -> Vec<String> {
        let Some(provider) = &self.provider else {
            tracing::info!("No tips provider configured, returning default tips");
            return default_tips(course_title, credit_units);
        };

        let prompt = build_prompt(course_title, credit_units);
        tracing::info!("Requesting study tips for course '{}'", course_title);

        match provider.complete(&prompt).await {
            Ok(content) => {
                tracing::debug!("Completion: {}", content);
                parse_tips(&content, course_title)
            }
            Err(e) => {
                tracing::warn!(
                    "Tips provider failed: {}. Using fallback tips for {}",
                    e,
                    course_title
                );
                fallback_tips(course_title, credit_units)
            }
        }
    }
}

fn build_prompt(course_title: &str, credit_units: i64) -> String {
    format!(
        "Generate 3-5 practical study tips for a {credit_units}-credit course called \
         '{course_title}'. Focus on time management, study techniques, and resource \
         utilization. Keep tips concise and actionable."
    )
}

fn default_tips(course_title: &str, credit_units: i64) -> Vec<String> {
    vec![
        format!("Study {course_title} for {credit_units} hours weekly"),
        "Create flashcards for key concepts".to_string(),
        "Practice with past exam papers".to_string(),
        "Join online forums related to the subject".to_string(),
        "Set specific weekly learning goals".to_string(),
    ]
}

const GENERIC_TIPS: [&str; 9] = [
    "Create a study schedule and stick to it consistently",
    "Break complex topics into smaller, manageable sections",
    "Use active recall by testing yourself without notes",
    "Create visual aids like mind maps and diagrams",
    "Form study groups to discuss difficult concepts",
    "Practice with past exams and timed exercises",
    "Teach the material to someone else to reinforce learning",
    "Use multiple resources - textbooks, videos, and online tutorials",
    "Review notes within 24 hours of each study session",
];

fn fallback_tips(course_title: &str, credit_units: i64) -> Vec<String> {
    let pool: Vec<String> =
        std::iter::once(format!("Allocate {credit_units} hours per week for {course_title}"))
            .chain(GENERIC_TIPS.iter().map(|t| t.to_string()))
            .collect();

    pool.choose_multiple(&mut rand::rng(), MAX_TIPS)
        .cloned()
        .collect()
}
