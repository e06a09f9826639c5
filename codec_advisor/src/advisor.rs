use tracing::debug;

use crate::descriptor::{
  TypeDescriptor, FLOAT_TOKEN, INT_TOKEN, SEQUENCE_TOKENS, STRING_TOKEN, TEMPORAL_TOKENS,
};

const DOUBLE_DELTA_ZSTD: &str = "CODEC(DoubleDelta, ZSTD(1))";
const DELTA_ZSTD: &str = "CODEC(Delta, ZSTD(1))";
const GORILLA_ZSTD: &str = "CODEC(Gorilla, ZSTD(1))";
const ZSTD: &str = "CODEC(ZSTD(1))";

/// The row of the decision table that produced a recommendation.
///
/// `Integer`, `String`, and `Fallback` currently share a codec, but are kept
/// apart so they can diverge independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
  /// Monotonic dates, times, and integers: constant strides collapse under
  /// second-order differences.
  MonotonicSequence,
  /// Monotonic floats.
  MonotonicFloat,
  /// Dates and times in arbitrary order.
  Temporal,
  Float,
  Integer,
  String,
  Fallback,
}

impl Rule {
  /// Every rule, in evaluation order.
  pub const ALL: [Rule; 7] = [
    Rule::MonotonicSequence,
    Rule::MonotonicFloat,
    Rule::Temporal,
    Rule::Float,
    Rule::Integer,
    Rule::String,
    Rule::Fallback,
  ];

  pub fn codec(&self) -> &'static str {
    match self {
      Rule::MonotonicSequence => DOUBLE_DELTA_ZSTD,
      Rule::MonotonicFloat | Rule::Float => GORILLA_ZSTD,
      Rule::Temporal => DELTA_ZSTD,
      Rule::Integer | Rule::String | Rule::Fallback => ZSTD,
    }
  }
}

/// What is known about a column when asking for a codec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
  pub data_type: TypeDescriptor,
  /// Whether values strictly increase row over row, e.g. insertion
  /// timestamps or auto-increment ids.
  pub is_monotonic: bool,
}

impl ColumnSpec {
  pub fn new(data_type: &str) -> Self {
    ColumnSpec {
      data_type: TypeDescriptor::new(data_type),
      is_monotonic: false,
    }
  }

  pub fn with_monotonic(mut self, is_monotonic: bool) -> Self {
    self.is_monotonic = is_monotonic;
    self
  }

  /// Evaluates the decision table. The first matching rule wins.
  pub fn classify(&self) -> Rule {
    let dt = &self.data_type;
    let rule = if self.is_monotonic && dt.contains_any(SEQUENCE_TOKENS) {
      Rule::MonotonicSequence
    } else if self.is_monotonic && dt.contains(FLOAT_TOKEN) {
      Rule::MonotonicFloat
    } else if dt.contains_any(TEMPORAL_TOKENS) {
      Rule::Temporal
    } else if dt.contains(FLOAT_TOKEN) {
      Rule::Float
    } else if dt.contains(INT_TOKEN) {
      Rule::Integer
    } else if dt.contains(STRING_TOKEN) {
      Rule::String
    } else {
      Rule::Fallback
    };
    debug!(
      data_type = dt.normalized(),
      is_monotonic = self.is_monotonic,
      ?rule,
      "classified column"
    );
    rule
  }

  pub fn suggest(&self) -> &'static str {
    self.classify().codec()
  }
}

/// Returns which rule applies to a column of the given type.
pub fn classify(data_type: &str, is_monotonic: bool) -> Rule {
  ColumnSpec::new(data_type)
    .with_monotonic(is_monotonic)
    .classify()
}

/// Returns the recommended `CODEC(...)` clause for a column of the given
/// type. Never fails; unknown types get plain zstd.
pub fn suggest(data_type: &str, is_monotonic: bool) -> &'static str {
  classify(data_type, is_monotonic).codec()
}
