//! Presentation helpers for the interactive binary.
//!
//! The core emits raw numbers; everything about how they look (prompts,
//! defaults on empty input, fixed-width trace tables, `%.6f` rounding)
//! happens here and nowhere else.

pub mod input;
pub mod table;
