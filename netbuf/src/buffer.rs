// SPDX-License-Identifier: Apache-2.0

mod int;
#[cfg(feature = "bytes")]
mod bytes;

pub use int::FixedInt;

use std::fmt;
use std::fmt::{Debug, Formatter};
use all_asserts::assert_le;
use simdutf8::compat::from_utf8;
use crate::{DEFAULT_CAPACITY, RESERVED_PREPEND};
use crate::error::{Error, Result};
use crate::error::Operation::{self, Peek, Retrieve};

/// A growable byte buffer with separate read and write cursors over one
/// contiguous region.
///
/// The readable region sits between the cursors, the writable region after
/// the write cursor, and the prependable region before the read cursor.
/// [`append`](Buffer::append) never fails; it compacts consumed space back
/// into the writable region when that suffices and grows the backing storage
/// only when it does not. [`prepend`](Buffer::prepend) writes backwards into
/// the reserve, which is how a length header lands in front of a payload
/// appended earlier without moving the payload.
#[derive(Clone)]
pub struct Buffer {
	storage: Vec<u8>,
	read_pos: usize,
	write_pos: usize,
}

impl Default for Buffer {
	fn default() -> Self { Self::new() }
}

impl Debug for Buffer {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Buffer")
			.field("capacity", &self.capacity())
			.field("read_pos", &self.read_pos)
			.field("write_pos", &self.write_pos)
			.finish_non_exhaustive()
	}
}

impl Buffer {
	/// Creates a buffer with the default capacity hint of
	/// [`DEFAULT_CAPACITY`] writable bytes.
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	/// Creates a buffer with `capacity` writable bytes, plus the
	/// [`RESERVED_PREPEND`] reserve ahead of the read cursor.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			storage: vec![0; RESERVED_PREPEND + capacity],
			read_pos: RESERVED_PREPEND,
			write_pos: RESERVED_PREPEND,
		}
	}

	/// Creates a buffer containing a copy of `data`.
	pub fn from_slice(data: &[u8]) -> Self {
		let mut buf = Self::with_capacity(data.len());
		buf.append(data);
		buf
	}

	/// Returns the total size of the backing storage.
	pub fn capacity(&self) -> usize { self.storage.len() }

	/// Returns the number of unread bytes between the cursors.
	pub fn readable_bytes(&self) -> usize { self.write_pos - self.read_pos }

	/// Returns the number of bytes that can be appended without reclamation.
	pub fn writable_bytes(&self) -> usize { self.storage.len() - self.write_pos }

	/// Returns the number of bytes ahead of the read cursor, available to
	/// [`prepend`](Buffer::prepend).
	pub fn prependable_bytes(&self) -> usize { self.read_pos }

	/// Returns `true` if there are no readable bytes.
	pub fn is_empty(&self) -> bool { self.read_pos == self.write_pos }

	/// Copies `data` after the write cursor, reclaiming or growing space
	/// first if the writable region is too small. Readable bytes are never
	/// disturbed.
	pub fn append(&mut self, data: &[u8]) {
		self.ensure_writable(data.len());
		self.storage[self.write_pos..self.write_pos + data.len()].copy_from_slice(data);
		self.write_pos += data.len();
	}

	/// Copies `data` backwards into the reserve ahead of the read cursor, so
	/// it reads back immediately before the current readable bytes. Repeated
	/// prepends stack towards the front.
	///
	/// Errors with [`ErrorKind::ReserveOverflow`](crate::ErrorKind) when
	/// `data` is wider than [`prependable_bytes`](Buffer::prependable_bytes);
	/// the buffer is unchanged.
	pub fn prepend(&mut self, data: &[u8]) -> Result {
		if data.len() > self.prependable_bytes() {
			return Err(Error::reserve_overflow(data.len(), self.prependable_bytes()))
		}
		self.read_pos -= data.len();
		self.storage[self.read_pos..self.read_pos + data.len()].copy_from_slice(data);
		Ok(())
	}

	/// Makes room for at least `count` writable bytes, compacting consumed
	/// space when that suffices and growing the storage otherwise.
	pub fn ensure_writable(&mut self, count: usize) {
		if self.writable_bytes() < count {
			self.make_space(count);
		}
	}

	/// Returns the writable region as a mutable slice, for callers writing
	/// into the buffer without an intermediate copy, such as a socket read.
	/// Pair with [`has_written`](Buffer::has_written) once the write lands.
	pub fn writable_slice(&mut self) -> &mut [u8] {
		&mut self.storage[self.write_pos..]
	}

	/// Advances the write cursor over `count` bytes written through
	/// [`writable_slice`](Buffer::writable_slice).
	pub fn has_written(&mut self, count: usize) {
		assert_le!(count, self.writable_bytes(), "write cursor advanced past the writable region");
		self.write_pos += count;
	}

	/// Consumes `count` readable bytes. A count at or past
	/// [`readable_bytes`](Buffer::readable_bytes) drains the buffer and
	/// resets both cursors to the reserve boundary; the excess is not an
	/// error. Use [`try_retrieve`](Buffer::try_retrieve) where over-consuming
	/// should fail instead.
	pub fn retrieve(&mut self, count: usize) {
		if count < self.readable_bytes() {
			self.read_pos += count;
		} else {
			self.retrieve_all();
		}
	}

	/// Consumes exactly `count` readable bytes, erroring without moving the
	/// cursor when fewer are available. The strict counterpart of
	/// [`retrieve`](Buffer::retrieve).
	pub fn try_retrieve(&mut self, count: usize) -> Result {
		self.require(Retrieve, count)?;
		self.retrieve(count);
		Ok(())
	}

	/// Drains the buffer, resetting both cursors to the reserve boundary.
	pub fn retrieve_all(&mut self) {
		self.read_pos = RESERVED_PREPEND;
		self.write_pos = RESERVED_PREPEND;
	}

	/// Copies out and consumes `count` readable bytes.
	pub fn retrieve_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
		let bytes = self.peek(count).map_err(|e| e.with_operation(Retrieve))?.to_vec();
		self.retrieve(count);
		Ok(bytes)
	}

	/// Copies out and consumes all readable bytes.
	pub fn retrieve_all_bytes(&mut self) -> Vec<u8> {
		let bytes = self.peek_all().to_vec();
		self.retrieve_all();
		bytes
	}

	/// Copies out and consumes `count` readable bytes as a UTF-8 string. A
	/// failed validation consumes nothing.
	pub fn retrieve_string(&mut self, count: usize) -> Result<String> {
		let bytes = self.peek(count).map_err(|e| e.with_operation(Retrieve))?;
		let str = from_utf8(bytes).map_err(|e| Error::invalid_utf8(Retrieve, e.into()))?;
		let string = str.to_owned();
		self.retrieve(count);
		Ok(string)
	}

	/// Copies out and consumes all readable bytes as a UTF-8 string. A
	/// failed validation consumes nothing.
	pub fn retrieve_all_string(&mut self) -> Result<String> {
		self.retrieve_string(self.readable_bytes())
	}

	/// Copies `dest.len()` readable bytes into `dest` and consumes them,
	/// with no allocation. Errors without consuming when `dest` is larger
	/// than the readable region.
	pub fn retrieve_into(&mut self, dest: &mut [u8]) -> Result {
		let src = self.peek(dest.len()).map_err(|e| e.with_operation(Retrieve))?;
		dest.copy_from_slice(src);
		self.retrieve(dest.len());
		Ok(())
	}

	/// Returns the first `count` readable bytes without consuming them.
	///
	/// The view aliases the buffer's storage, borrowing it until dropped; a
	/// later mutation may compact or grow the storage out from under the
	/// range it referred to.
	pub fn peek(&self, count: usize) -> Result<&[u8]> {
		self.require(Peek, count)?;
		Ok(&self.storage[self.read_pos..self.read_pos + count])
	}

	/// Returns the readable region without consuming it. See
	/// [`peek`](Buffer::peek) for the aliasing caveat.
	pub fn peek_all(&self) -> &[u8] {
		&self.storage[self.read_pos..self.write_pos]
	}

	pub(crate) fn require(&self, op: Operation, count: usize) -> Result {
		if count > self.readable_bytes() {
			Err(Error::exhausted(op, count, self.readable_bytes()))
		} else {
			Ok(())
		}
	}

	/// Compacts when the dead space before the read cursor plus the writable
	/// tail fits `needed` bytes alongside the reserve; grows by the shortfall
	/// otherwise. Growth only ever adds; storage never shrinks.
	fn make_space(&mut self, needed: usize) {
		let writable = self.writable_bytes();
		if writable + self.prependable_bytes() >= needed + RESERVED_PREPEND {
			// Slide the readable region back to the reserve boundary, not
			// offset zero, keeping the reserve for future prepends.
			let readable = self.readable_bytes();
			self.storage.copy_within(self.read_pos..self.write_pos, RESERVED_PREPEND);
			self.read_pos = RESERVED_PREPEND;
			self.write_pos = RESERVED_PREPEND + readable;
		} else {
			let more = needed - writable;
			self.storage.resize(self.storage.len() + more, 0);
		}
	}
}

impl PartialEq for Buffer {
	fn eq(&self, other: &Self) -> bool {
		self.peek_all() == other.peek_all()
	}
}

impl Eq for Buffer { }

impl PartialEq<[u8]> for Buffer {
	fn eq(&self, other: &[u8]) -> bool {
		self.peek_all() == other
	}
}

impl PartialEq<&[u8]> for Buffer {
	fn eq(&self, other: &&[u8]) -> bool {
		self.peek_all() == *other
	}
}
