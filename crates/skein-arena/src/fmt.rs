//! Bounded formatted-write sinks.
//!
//! `core::fmt` is the rendering collaborator: [`measure`] reports the
//! exact byte length a `format_args!` rendering requires without writing
//! anything, and [`render`] writes into a fixed slice, truncating at its
//! end. Callers measure first and commit only when the rendering fits, so
//! a failed formatted append never leaves a partial write behind.

use std::fmt::{self, Write};

/// Counting sink: discards bytes, accumulates the required length.
struct CountSink(usize);

impl Write for CountSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Byte length the rendering of `args` requires.
pub(crate) fn measure(args: fmt::Arguments<'_>) -> usize {
    let mut sink = CountSink(0);
    // CountSink never errors.
    let _ = sink.write_fmt(args);
    sink.0
}

/// Slice sink: copies what fits, drops the rest.
struct SliceSink<'a> {
    buf: &'a mut [u8],
    written: usize,
}

impl Write for SliceSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let spare = self.buf.len() - self.written;
        let n = s.len().min(spare);
        self.buf[self.written..self.written + n].copy_from_slice(&s.as_bytes()[..n]);
        self.written += n;
        Ok(())
    }
}

/// Render `args` into `buf`, truncating at its end; returns bytes written.
///
/// Truncation is byte-wise and may split a multi-byte UTF-8 sequence —
/// the arena stores bytes, not checked UTF-8.
pub(crate) fn render(buf: &mut [u8], args: fmt::Arguments<'_>) -> usize {
    let mut sink = SliceSink { buf, written: 0 };
    let _ = sink.write_fmt(args);
    sink.written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_matches_format() {
        let n = 1234;
        assert_eq!(measure(format_args!("n = {n}")), "n = 1234".len());
        assert_eq!(measure(format_args!("")), 0);
    }

    #[test]
    fn render_fills_and_reports() {
        let mut buf = [0u8; 16];
        let written = render(&mut buf, format_args!("{}-{}", 4, 2));
        assert_eq!(written, 3);
        assert_eq!(&buf[..3], b"4-2");
    }

    #[test]
    fn render_truncates_at_end() {
        let mut buf = [0u8; 4];
        let written = render(&mut buf, format_args!("overflow"));
        assert_eq!(written, 4);
        assert_eq!(&buf, b"over");
    }
}
