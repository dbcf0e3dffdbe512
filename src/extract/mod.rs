//! Article extraction
//!
//! This module is organized into:
//! - `state`: the region tracker, a state machine over tokenizer events
//! - `driver`: `Extractor`, which runs one tracker per document and
//!   finalizes the result

mod driver;
mod state;

pub use self::driver::Extractor;
