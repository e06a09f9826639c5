use anyhow::Result;

// Never rejects: anything that isn't a recognized truthy token means "not
// monotonic".
pub fn monotonic_flag(s: &str) -> Result<bool> {
  Ok(codec_advisor::parse_monotonic_flag(s))
}
