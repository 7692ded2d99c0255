// SPDX-License-Identifier: Apache-2.0

use all_asserts::assert_le;
use bytes::{Buf, BufMut};
use bytes::buf::UninitSlice;
use crate::Buffer;

impl Buf for Buffer {
	fn remaining(&self) -> usize {
		self.readable_bytes()
	}

	fn chunk(&self) -> &[u8] {
		self.peek_all()
	}

	fn advance(&mut self, cnt: usize) {
		assert_le!(cnt, self.readable_bytes(), "advance past the readable region");
		self.retrieve(cnt);
	}
}

unsafe impl BufMut for Buffer {
	fn remaining_mut(&self) -> usize {
		// The writable region grows on demand, the same convention the
		// bytes crate uses for Vec<u8>.
		isize::MAX as usize - self.write_pos
	}

	unsafe fn advance_mut(&mut self, cnt: usize) {
		self.has_written(cnt);
	}

	fn chunk_mut(&mut self) -> &mut UninitSlice {
		if self.writable_bytes() == 0 {
			self.ensure_writable(64);
		}
		// Storage is always zero-initialized, so the writable region is a
		// valid initialized slice.
		UninitSlice::new(self.writable_slice())
	}
}
