//! Evaluation result.

use std::fmt;

/// Message reported when every criterion is met.
pub const STRONG_MESSAGE: &str = "Password is strong.";

/// First line of the report when at least one criterion is unmet.
pub const WEAK_HEADER: &str = "Password is weak. Please address the following issues:";

/// Outcome of evaluating one password against a policy.
///
/// `is_strong()` is true iff no criterion was unmet. The message is fully
/// composed at construction; callers only need to print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    is_strong: bool,
    message: String,
    issues: Vec<&'static str>,
}

impl Feedback {
    /// Builds feedback from the messages of unmet criteria, in evaluation order.
    pub fn from_issues(issues: Vec<&'static str>) -> Self {
        if issues.is_empty() {
            return Self {
                is_strong: true,
                message: STRONG_MESSAGE.to_string(),
                issues,
            };
        }

        let mut message = format!("{}\n", WEAK_HEADER);
        for issue in &issues {
            message.push_str("- ");
            message.push_str(issue);
            message.push('\n');
        }

        Self {
            is_strong: false,
            message,
            issues,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.is_strong
    }

    /// Success text, or the header followed by one `- ` line per issue.
    ///
    /// Every line of a weak report, including the last, ends in `\n`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of the unmet criteria, in evaluation order.
    pub fn issues(&self) -> &[&'static str] {
        &self.issues
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_strong() {
        let feedback = Feedback::from_issues(Vec::new());
        assert!(feedback.is_strong());
        assert_eq!(feedback.message(), "Password is strong.");
        assert!(feedback.issues().is_empty());
    }

    #[test]
    fn test_feedback_weak_layout() {
        let feedback = Feedback::from_issues(vec!["first issue", "second issue"]);
        assert!(!feedback.is_strong());
        assert_eq!(
            feedback.message(),
            "Password is weak. Please address the following issues:\n- first issue\n- second issue\n"
        );
        assert_eq!(feedback.issues(), &["first issue", "second issue"]);
    }

    #[test]
    fn test_feedback_display_matches_message() {
        let feedback = Feedback::from_issues(vec!["only issue"]);
        assert_eq!(feedback.to_string(), feedback.message());
    }

    #[test]
    fn test_feedback_weak_ends_with_newline() {
        let feedback = Feedback::from_issues(vec!["only issue"]);
        assert!(feedback.message().ends_with("- only issue\n"));
        assert!(!Feedback::from_issues(Vec::new()).message().ends_with('\n'));
    }
}
