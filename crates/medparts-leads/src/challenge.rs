//! Arithmetic human-verification challenge.
//!
//! A deterrence heuristic, not a security control: the expected answer lives
//! next to the question on the submitting client.

use std::fmt;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::error::ValidationError;

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("valid numeric regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "+"),
            Operation::Sub => write!(f, "-"),
            Operation::Mul => write!(f, "×"),
        }
    }
}

/// A question/expected-answer pair, held alongside the form and regenerated
/// on demand or after a mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    a: i32,
    b: i32,
    op: Operation,
    answer: i32,
}

impl Challenge {
    /// Builds a challenge from explicit operands, computing the expected
    /// answer.
    #[must_use]
    pub fn new(op: Operation, a: i32, b: i32) -> Self {
        let answer = match op {
            Operation::Add => a + b,
            Operation::Sub => a - b,
            Operation::Mul => a * b,
        };
        Challenge { a, b, op, answer }
    }

    /// Generates a random challenge: addition of two values in [1,20],
    /// subtraction with minuend in [10,29] and subtrahend in [1,10], or
    /// multiplication of two values in [1,10].
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        match rng.random_range(0..3) {
            0 => Challenge::new(
                Operation::Add,
                rng.random_range(1..=20),
                rng.random_range(1..=20),
            ),
            1 => Challenge::new(
                Operation::Sub,
                rng.random_range(10..=29),
                rng.random_range(1..=10),
            ),
            _ => Challenge::new(
                Operation::Mul,
                rng.random_range(1..=10),
                rng.random_range(1..=10),
            ),
        }
    }

    /// The question presented to the user, e.g. `"7 + 12 = ?"`.
    #[must_use]
    pub fn question(&self) -> String {
        format!("{} {} {} = ?", self.a, self.op, self.b)
    }

    #[must_use]
    pub fn expected(&self) -> i32 {
        self.answer
    }

    /// Checks the user's answer: trimmed, must be an integer literal
    /// (non-numeric input is rejected regardless of numeric equivalence),
    /// and must equal the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ChallengeNotNumeric`] for non-integer
    /// input and [`ValidationError::ChallengeMismatch`] for a wrong answer.
    pub fn verify(&self, input: &str) -> Result<(), ValidationError> {
        let input = input.trim();
        if !NUMERIC_RE.is_match(input) {
            return Err(ValidationError::ChallengeNotNumeric);
        }
        let parsed: i64 = input
            .parse()
            .map_err(|_| ValidationError::ChallengeNotNumeric)?;
        if parsed != i64::from(self.answer) {
            return Err(ValidationError::ChallengeMismatch);
        }
        Ok(())
    }
}
