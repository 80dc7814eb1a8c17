use license_bouncer::prelude::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Mock OutputDestination that captures the rendered document in memory
#[derive(Default, Clone)]
pub struct MockDestination {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

#[allow(dead_code)]
impl MockDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl OutputDestination for MockDestination {
    fn deliver(&self, presenter: &dyn Presenter) -> Result<()> {
        let mut buffer = self.buffer.lock().unwrap();
        presenter.present(&mut *buffer)
    }
}

/// Sink that accepts `budget` bytes, then rejects every write
#[allow(dead_code)]
pub struct FailingSink {
    pub accepted: Vec<u8>,
    budget: usize,
}

#[allow(dead_code)]
impl FailingSink {
    pub fn after(budget: usize) -> Self {
        Self {
            accepted: Vec::new(),
            budget,
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let remaining = self.budget.saturating_sub(self.accepted.len());
        if remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        }
        let n = buf.len().min(remaining);
        self.accepted.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
