//! Password strength evaluator - runs every criterion and aggregates the unmet ones.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::criteria::Criterion;
use crate::feedback::Feedback;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvaluatorError {
    #[error("At least one criterion is required")]
    NoCriteria,
}

/// Holds one password and the ordered policy it is checked against.
///
/// The criteria list is never empty; its order is the report order.
#[derive(Debug)]
pub struct StrengthEvaluator {
    password: SecretString,
    criteria: Vec<Criterion>,
}

impl StrengthEvaluator {
    /// Creates an evaluator using [`Criterion::defaults`].
    pub fn new(password: SecretString) -> Self {
        Self {
            password,
            criteria: Criterion::defaults(),
        }
    }

    /// Creates an evaluator with a custom policy.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluatorError::NoCriteria`] if `criteria` is empty.
    pub fn with_criteria(
        password: SecretString,
        criteria: Vec<Criterion>,
    ) -> Result<Self, EvaluatorError> {
        if criteria.is_empty() {
            return Err(EvaluatorError::NoCriteria);
        }
        Ok(Self { password, criteria })
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Evaluates every criterion, in order, without short-circuiting.
    pub fn assess_strength(&self) -> Feedback {
        assess(self.password.expose_secret(), &self.criteria)
    }
}

fn assess(password: &str, criteria: &[Criterion]) -> Feedback {
    let mut issues = Vec::new();

    for criterion in criteria {
        if !criterion.satisfied(password) {
            #[cfg(feature = "tracing")]
            tracing::trace!("criterion not satisfied: {:?}", criterion);
            issues.push(criterion.describe());
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: {} of {} criteria unmet",
        issues.len(),
        criteria.len()
    );

    Feedback::from_issues(issues)
}

/// Evaluates `password` against the default policy.
pub fn assess_password_strength(password: &SecretString) -> Feedback {
    assess(password.expose_secret(), &Criterion::defaults())
}

/// Async version that sends the feedback via channel.
#[cfg(feature = "async")]
pub async fn assess_password_strength_tx(password: &SecretString, tx: mpsc::Sender<Feedback>) {
    let feedback = assess_password_strength(password);

    if let Err(err) = tx.send(feedback).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password feedback: {}", err);
        #[cfg(not(feature = "tracing"))]
        drop(err);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_assess_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let pwd = SecretString::new("TestPass123!".to_string().into());

        assess_password_strength_tx(&pwd, tx).await;

        let feedback = rx.recv().await.expect("Should receive feedback");
        assert!(feedback.is_strong());
    }

    #[tokio::test]
    async fn test_assess_password_strength_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let pwd = SecretString::new("weak".to_string().into());

        // Must not panic when nobody is listening.
        assess_password_strength_tx(&pwd, tx).await;
    }
}
