//! Ratio descriptors: colon-separated integer weights such as `"1:1:2"`.
//!
//! A descriptor is accepted when it matches `INTEGER (":" INTEGER)+` and no
//! term is zero. Signs are permitted, so `"-1:2"` parses; what a negative
//! weight does downstream is up to the partitioner.

use std::fmt;
use std::str::FromStr;

/// Why a ratio descriptor was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Reason {
    /// The descriptor has fewer than two terms.
    #[error("ratios must contain at least one colon")]
    MissingColon,
    /// The descriptor starts or ends with `:`.
    #[error("ratios cannot begin or end with a colon")]
    EdgeColon,
    /// The descriptor contains `::`.
    #[error("ratios can only be delimited by single colons")]
    RepeatedColon,
    /// A term is not a base-10 integer.
    #[error("ratios can only contain valid integers")]
    NotAnInteger,
    /// A term is zero.
    #[error("ratios cannot contain 0 as an integer")]
    ZeroTerm,
}

/// A malformed ratio descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ratio {ratio:?}: {reason}")]
pub struct InvalidRatio {
    ratio: String,
    reason: Reason,
}

impl InvalidRatio {
    fn new(ratio: &str, reason: Reason) -> Self {
        Self {
            ratio: ratio.to_owned(),
            reason,
        }
    }

    /// The descriptor that was rejected.
    pub fn ratio(&self) -> &str {
        &self.ratio
    }

    /// The first rule the descriptor broke.
    pub const fn reason(&self) -> Reason {
        self.reason
    }
}

/// A validated sequence of non-zero weights, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ratio {
    weights: Vec<i32>,
}

impl Ratio {
    /// Check a descriptor without extracting its weights.
    pub fn validate(s: &str) -> Result<(), InvalidRatio> {
        let fail = |reason| Err(InvalidRatio::new(s, reason));

        if !s.contains(':') {
            return fail(Reason::MissingColon);
        }
        if s.starts_with(':') || s.ends_with(':') {
            return fail(Reason::EdgeColon);
        }
        if s.contains("::") {
            return fail(Reason::RepeatedColon);
        }
        for token in s.split(':') {
            match parse_term(token) {
                None => return fail(Reason::NotAnInteger),
                Some(0) => return fail(Reason::ZeroTerm),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Validate a descriptor and extract its weights.
    pub fn parse(s: &str) -> Result<Self, InvalidRatio> {
        Self::validate(s)?;
        Ok(Self::extract(s))
    }

    /// Split an already-validated descriptor into weights.
    fn extract(s: &str) -> Self {
        let weights = s.split(':').filter_map(parse_term).collect();
        Self { weights }
    }

    /// Build a ratio from trusted constants.
    pub(crate) fn from_static(weights: &[i32]) -> Self {
        debug_assert!(weights.len() >= 2 && !weights.contains(&0));
        Self {
            weights: weights.to_vec(),
        }
    }

    /// The weights in source order.
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Number of regions this ratio produces.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`; a valid ratio has at least two terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights.
    pub fn base(&self) -> i64 {
        self.weights.iter().copied().map(i64::from).sum()
    }
}

/// An optional sign followed by at least one ASCII digit, fitting in `i32`.
fn parse_term(token: &str) -> Option<i32> {
    let digits = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

impl FromStr for Ratio {
    type Err = InvalidRatio;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{w}")?;
        }
        Ok(())
    }
}
