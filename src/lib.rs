//! Password criteria validation library
//!
//! Checks a password against an ordered set of independent rules and
//! reports either success or every unmet rule with remediation text.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based delivery of feedback
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-criteria` binary
//!
//! # Environment Variables
//!
//! - `PWD_CRITERIA_BLACKLIST_PATH`: Custom path to the common password list
//!   used by [`Blacklist::load`] (default: `./assets/blacklist.txt`)
//!
//! The blacklist is library-only: [`Criterion::NotBlacklisted`] is never part
//! of [`Criterion::defaults`], and the `pwd-criteria` binary does not load it.
//!
//! # Example
//!
//! ```rust
//! use pwd_criteria::StrengthEvaluator;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("PASSWORD1!".to_string().into());
//! let feedback = StrengthEvaluator::new(password).assess_strength();
//!
//! assert!(!feedback.is_strong());
//! assert_eq!(
//!     feedback.issues(),
//!     &["Password must contain at least one lowercase letter."]
//! );
//! println!("{}", feedback);
//! ```

// Internal modules
mod blacklist;
mod criteria;
mod evaluator;
mod feedback;

// Public API
pub use blacklist::{blacklist_path, Blacklist, BlacklistError, BLACKLIST_PATH_ENV};
pub use criteria::{Criterion, MIN_LENGTH};
pub use evaluator::{assess_password_strength, EvaluatorError, StrengthEvaluator};
pub use feedback::{Feedback, STRONG_MESSAGE, WEAK_HEADER};

#[cfg(feature = "async")]
pub use evaluator::assess_password_strength_tx;
