// SPDX-License-Identifier: Apache-2.0

//! The fixed-width integer codec atop [`Buffer`]: append, prepend, peek,
//! read, and retrieve families over the primitive integer types, all in
//! network byte order. Widths are dispatched at compile time through
//! [`FixedInt`]; no other byte order is supported.

use std::mem;
use num_traits::PrimInt;
use crate::Buffer;
use crate::error::{Error, Result};
use crate::error::Operation::{Peek, Read};

/// A fixed-width primitive integer with an explicit big-endian wire
/// contract.
pub trait FixedInt: PrimInt {
	/// The encoded width in bytes.
	const SIZE: usize;

	/// Encodes into the first [`SIZE`](Self::SIZE) bytes of `dst` in network
	/// byte order.
	fn put_be(self, dst: &mut [u8]);

	/// Decodes the first [`SIZE`](Self::SIZE) bytes of `src` in network byte
	/// order.
	fn get_be(src: &[u8]) -> Self;
}

macro_rules! gen_fixed_int {
	($($ty:ident)+) => {
		$(
		impl FixedInt for $ty {
			const SIZE: usize = mem::size_of::<$ty>();

			fn put_be(self, dst: &mut [u8]) {
				dst[..Self::SIZE].copy_from_slice(&self.to_be_bytes());
			}

			fn get_be(src: &[u8]) -> Self {
				let mut bytes = [0; mem::size_of::<$ty>()];
				bytes.copy_from_slice(&src[..Self::SIZE]);
				Self::from_be_bytes(bytes)
			}
		}
		)+
	};
}

gen_fixed_int! { i8 u8 i16 u16 i32 u32 i64 u64 }

impl Buffer {
	/// Appends `value` in network byte order, growing as needed.
	pub fn append_int<T: FixedInt>(&mut self, value: T) {
		self.ensure_writable(T::SIZE);
		value.put_be(&mut self.storage[self.write_pos..]);
		self.write_pos += T::SIZE;
	}

	/// Prepends `value` in network byte order into the reserve ahead of the
	/// read cursor, erroring when the reserve is too small.
	pub fn prepend_int<T: FixedInt>(&mut self, value: T) -> Result {
		if T::SIZE > self.prependable_bytes() {
			return Err(Error::reserve_overflow(T::SIZE, self.prependable_bytes()))
		}
		self.read_pos -= T::SIZE;
		value.put_be(&mut self.storage[self.read_pos..]);
		Ok(())
	}

	/// Decodes a `T` at the read cursor without consuming it.
	pub fn peek_int<T: FixedInt>(&self) -> Result<T> {
		self.require(Peek, T::SIZE)?;
		Ok(T::get_be(self.peek_all()))
	}

	/// Decodes and consumes a `T`. A failed decode consumes nothing.
	pub fn read_int<T: FixedInt>(&mut self) -> Result<T> {
		let value = self.peek_int::<T>().map_err(|e| e.with_operation(Read))?;
		self.retrieve(T::SIZE);
		Ok(value)
	}
}

macro_rules! gen_int_codec {
	($($append:ident $prepend:ident $peek:ident $read:ident $retrieve:ident -> $ty:ident,)+) => {
		impl Buffer {
			$(
			pub fn $append(&mut self, value: $ty) {
				self.append_int(value)
			}

			pub fn $prepend(&mut self, value: $ty) -> Result {
				self.prepend_int(value)
			}

			pub fn $peek(&self) -> Result<$ty> {
				self.peek_int()
			}

			pub fn $read(&mut self) -> Result<$ty> {
				self.read_int()
			}

			pub fn $retrieve(&mut self) {
				self.retrieve(mem::size_of::<$ty>())
			}
			)+
		}
	};
}

gen_int_codec! {
	append_i8  prepend_i8  peek_i8  read_i8  retrieve_i8  -> i8,
	append_u8  prepend_u8  peek_u8  read_u8  retrieve_u8  -> u8,
	append_i16 prepend_i16 peek_i16 read_i16 retrieve_i16 -> i16,
	append_u16 prepend_u16 peek_u16 read_u16 retrieve_u16 -> u16,
	append_i32 prepend_i32 peek_i32 read_i32 retrieve_i32 -> i32,
	append_u32 prepend_u32 peek_u32 read_u32 retrieve_u32 -> u32,
	append_i64 prepend_i64 peek_i64 read_i64 retrieve_i64 -> i64,
	append_u64 prepend_u64 peek_u64 read_u64 retrieve_u64 -> u64,
}

#[cfg(test)]
mod test {
	use std::mem;
	use paste::paste;
	use quickcheck_macros::quickcheck;
	use crate::{Buffer, RESERVED_PREPEND};
	use crate::error::ErrorKind;

	macro_rules! gen {
		($($ty:ident),+) => {
			paste! {
				$(
				#[quickcheck]
				fn [<round_trip_ $ty>](v: $ty) {
					let mut buf = Buffer::new();
					buf.[<append_ $ty>](v);
					assert_eq!(buf.readable_bytes(), mem::size_of::<$ty>());
					assert_eq!(buf.[<read_ $ty>]().unwrap(), v);
					assert!(buf.is_empty());
				}

				#[quickcheck]
				fn [<prepend_round_trip_ $ty>](v: $ty) {
					let mut buf = Buffer::new();
					buf.[<prepend_ $ty>](v).unwrap();
					assert_eq!(buf.prependable_bytes(), RESERVED_PREPEND - mem::size_of::<$ty>());
					assert_eq!(buf.[<read_ $ty>]().unwrap(), v);
				}

				#[test]
				fn [<extremes_ $ty>]() {
					for v in [$ty::MIN, 0, $ty::MAX] {
						let mut buf = Buffer::new();
						buf.[<append_ $ty>](v);
						assert_eq!(buf.[<peek_ $ty>]().unwrap(), v);
						assert_eq!(buf.[<read_ $ty>]().unwrap(), v);
						assert!(buf.is_empty());
					}
				}

				#[test]
				fn [<retrieve_skips_ $ty>]() {
					let mut buf = Buffer::new();
					buf.[<append_ $ty>]($ty::MAX);
					buf.[<retrieve_ $ty>]();
					assert!(buf.is_empty());
				}
				)+
			}
		};
	}

	gen! { i8, u8, i16, u16, i32, u32, i64, u64 }

	#[test]
	fn network_byte_order() {
		let mut buf = Buffer::new();
		buf.append_u32(0x0102_0304);
		assert_eq!(buf, &[1, 2, 3, 4][..]);

		let mut buf = Buffer::new();
		buf.append_u16(500);
		assert_eq!(buf, &[0x01, 0xF4][..]);
	}

	#[test]
	fn peek_empty_fails() {
		let buf = Buffer::new();
		let err = buf.peek_i64().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Exhausted(8, 0));
	}

	#[test]
	fn failed_read_consumes_nothing() {
		let mut buf = Buffer::from_slice(&[1, 2, 3]);
		assert!(buf.read_u32().is_err());
		assert_eq!(buf.readable_bytes(), 3);
		assert_eq!(buf.read_u16().unwrap(), 0x0102);
	}

	#[test]
	fn mixed_field_sequence() {
		let mut buf = Buffer::new();
		buf.append_i64(i64::MAX);
		buf.append_u16(u16::MAX);
		buf.append(b"tic tac toe");
		buf.append_i8(10);
		buf.append_u32(u32::MAX);

		assert_eq!(buf.read_i64().unwrap(), i64::MAX);
		assert_eq!(buf.read_u16().unwrap(), u16::MAX);
		assert_eq!(buf.retrieve_string(11).unwrap(), "tic tac toe");
		assert_eq!(buf.read_i8().unwrap(), 10);
		assert_eq!(buf.read_u32().unwrap(), u32::MAX);
		assert!(buf.is_empty());
	}
}
