// SPDX-License-Identifier: Apache-2.0

use std::cmp::min;
use std::io;
use std::io::{BufRead, Read, Write};
use crate::Buffer;
use crate::error::{Error, Result};
use crate::error::Operation::{Drain, Fill};

impl Buffer {
	/// Reads up to `count` bytes from `reader` straight into the writable
	/// region, with one `read` call and no intermediate copy; the usual way
	/// to land a socket read in the buffer. Returns the number of bytes
	/// read, zero meaning end-of-stream.
	pub fn fill_from_reader(&mut self, reader: &mut impl Read, count: usize) -> Result<usize> {
		self.ensure_writable(count);
		let read = reader
			.read(&mut self.writable_slice()[..count])
			.map_err(|e| Error::io(Fill, e))?;
		self.has_written(read);
		Ok(read)
	}

	/// Writes up to `count` readable bytes into `writer` with one `write`
	/// call, consuming what the writer accepted. `count` is clamped to the
	/// readable region.
	pub fn drain_into_writer(&mut self, writer: &mut impl Write, count: usize) -> Result<usize> {
		let count = min(count, self.readable_bytes());
		let written = writer
			.write(&self.peek_all()[..count])
			.map_err(|e| Error::io(Drain, e))?;
		self.retrieve(written);
		Ok(written)
	}
}

impl Write for Buffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.append(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl Read for Buffer {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let count = min(buf.len(), self.readable_bytes());
		buf[..count].copy_from_slice(&self.peek_all()[..count]);
		self.retrieve(count);
		Ok(count)
	}
}

impl BufRead for Buffer {
	fn fill_buf(&mut self) -> io::Result<&[u8]> {
		Ok(self.peek_all())
	}

	fn consume(&mut self, amt: usize) {
		self.retrieve(amt)
	}
}

#[cfg(test)]
mod test {
	use std::io::{BufRead, Read, Write};
	use crate::{Buffer, RESERVED_PREPEND};

	#[test]
	fn fill_from_reader_lands_in_writable_region() {
		let mut buf = Buffer::with_capacity(4);
		let mut source: &[u8] = b"hello, world";
		assert_eq!(buf.fill_from_reader(&mut source, 12).unwrap(), 12);
		assert_eq!(buf, &b"hello, world"[..]);

		// Drained source reads as end-of-stream.
		assert_eq!(buf.fill_from_reader(&mut source, 4).unwrap(), 0);
	}

	#[test]
	fn drain_into_writer_consumes_written() {
		let mut buf = Buffer::from_slice(b"hello, world");
		let mut sink = Vec::new();
		assert_eq!(buf.drain_into_writer(&mut sink, 5).unwrap(), 5);
		assert_eq!(sink, b"hello");
		assert_eq!(buf, &b", world"[..]);

		// A count past the readable region clamps.
		assert_eq!(buf.drain_into_writer(&mut sink, 100).unwrap(), 7);
		assert_eq!(sink, b"hello, world");
		assert_eq!(buf.prependable_bytes(), RESERVED_PREPEND);
	}

	#[test]
	fn write_then_read() {
		let mut buf = Buffer::new();
		buf.write_all(b"framed").unwrap();
		let mut out = [0; 6];
		buf.read_exact(&mut out).unwrap();
		assert_eq!(&out, b"framed");
		assert!(buf.is_empty());
	}

	#[test]
	fn read_clamps_to_readable() {
		let mut buf = Buffer::from_slice(b"abc");
		let mut out = [0; 8];
		assert_eq!(Read::read(&mut buf, &mut out).unwrap(), 3);
		assert_eq!(&out[..3], b"abc");
		assert_eq!(Read::read(&mut buf, &mut out).unwrap(), 0);
	}

	#[test]
	fn buf_read_lines() {
		let mut buf = Buffer::from_slice(b"GET / HTTP/1.1\r\nHost: x\r\n");
		let mut line = String::new();
		buf.read_line(&mut line).unwrap();
		assert_eq!(line, "GET / HTTP/1.1\r\n");
		assert_eq!(buf.fill_buf().unwrap(), b"Host: x\r\n");
	}
}
