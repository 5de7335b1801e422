//! Fixed-capacity text buffer
//!
//! Every rendered segment goes through a [`BoundedString`]. Writes past the
//! capacity are cut at the last UTF-8 character boundary that fits; the
//! buffer never grows beyond the capacity it was created with.

use std::fmt;

#[derive(Debug, Clone)]
pub struct BoundedString {
    buf: String,
    capacity: usize,
    truncated: bool,
}

impl BoundedString {
    /// Create an empty buffer holding at most `capacity` bytes
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            capacity,
            truncated: false,
        }
    }

    /// Render `args` into a fresh buffer of `capacity` bytes
    pub fn format(capacity: usize, args: fmt::Arguments<'_>) -> Self {
        let mut out = Self::new(capacity);
        // write_str never fails, only Display impls can
        let _ = fmt::Write::write_fmt(&mut out, args);
        out
    }

    /// Append as much of `s` as fits
    pub fn push_str(&mut self, s: &str) {
        let room = self.remaining();
        if s.len() <= room {
            self.buf.push_str(s);
            return;
        }

        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf.push_str(&s[..cut]);
        self.truncated = true;
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// Whether any write was cut short
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.truncated = false;
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for BoundedString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Display for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
