/// Tokens that mark a temporal type, e.g. `Date32` or `DateTime64(3)`.
pub const TEMPORAL_TOKENS: &[&str] = &["date", "time"];
/// Tokens that make a type eligible for double delta when monotonic.
pub const SEQUENCE_TOKENS: &[&str] = &["date", "time", "int"];
pub const FLOAT_TOKEN: &str = "float";
pub const INT_TOKEN: &str = "int";
pub const STRING_TOKEN: &str = "string";

const TRUTHY_FLAGS: &[&str] = &["true", "1", "yes"];

/// A column type name, normalized for case-insensitive matching.
///
/// No attempt is made to parse the type; any string is accepted and only
/// substring containment is ever checked. This means e.g. `Interval` counts
/// as an integer and `LowCardinality(String)` counts as a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
  normalized: String,
}

impl TypeDescriptor {
  pub fn new(raw: &str) -> Self {
    TypeDescriptor {
      normalized: raw.to_lowercase(),
    }
  }

  pub fn normalized(&self) -> &str {
    &self.normalized
  }

  pub fn contains(&self, token: &str) -> bool {
    self.normalized.contains(token)
  }

  pub fn contains_any(&self, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| self.contains(token))
  }
}

impl From<&str> for TypeDescriptor {
  fn from(raw: &str) -> Self {
    TypeDescriptor::new(raw)
  }
}

/// Interprets a free-form monotonicity flag.
///
/// `true`, `1` and `yes` (any case) are truthy. Everything else, including
/// the empty string and surrounding whitespace, is false.
pub fn parse_monotonic_flag(raw: &str) -> bool {
  let lowered = raw.to_lowercase();
  TRUTHY_FLAGS.contains(&lowered.as_str())
}
