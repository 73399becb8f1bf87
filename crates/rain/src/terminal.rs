//! Mouse capture that is released on every exit path, unwinding included.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

pub trait MouseCaptureOps {
    fn enable(&self) -> io::Result<()>;
    fn disable(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermMouseCapture;

impl MouseCaptureOps for CrosstermMouseCapture {
    fn enable(&self) -> io::Result<()> {
        execute!(io::stdout(), EnableMouseCapture)
    }

    fn disable(&self) -> io::Result<()> {
        execute!(io::stdout(), DisableMouseCapture)
    }
}

/// Enables mouse capture on creation and disables it when released or dropped.
pub struct MouseCaptureGuard<O: MouseCaptureOps = CrosstermMouseCapture> {
    ops: O,
    released: bool,
}

impl MouseCaptureGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(CrosstermMouseCapture)
    }
}

impl<O: MouseCaptureOps> MouseCaptureGuard<O> {
    pub fn with_ops(ops: O) -> io::Result<Self> {
        ops.enable()?;
        Ok(Self {
            ops,
            released: false,
        })
    }

    /// Disable capture now, reporting any error.
    pub fn release(mut self) -> io::Result<()> {
        self.released = true;
        self.ops.disable()
    }
}

impl<O: MouseCaptureOps> Drop for MouseCaptureGuard<O> {
    fn drop(&mut self) {
        if !self.released {
            let _ = self.ops.disable();
        }
    }
}
