#![doc = include_str!("../README.md")]

pub use advisor::{classify, suggest, ColumnSpec, Rule};
pub use descriptor::{parse_monotonic_flag, TypeDescriptor};

mod advisor;
mod descriptor;
