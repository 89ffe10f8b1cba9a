//! Where `print` output goes.
//!
//! - `Stdout`: the `lumen` binary
//! - `Buffer`: tests and embedders that want to inspect output
//!
//! Enum dispatch; the set of destinations is closed.

use std::sync::Arc;

use parking_lot::Mutex;

pub enum PrintHandlerImpl {
    Stdout,
    Buffer(Mutex<String>),
}

impl PrintHandlerImpl {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
        }
    }

    /// Everything captured so far. Empty unless this is a buffer.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout => String::new(),
        }
    }
}

/// Print handler shared between an interpreter and whoever created it.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

#[cfg(test)]
mod tests;
