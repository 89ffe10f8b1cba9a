//! Diagnostics for Lumen.
//!
//! Every error the toolchain reports becomes a [`Diagnostic`]: an
//! [`ErrorCode`], a message, and labelled spans into the source. The
//! [`TerminalEmitter`](emitter::TerminalEmitter) renders them for humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
