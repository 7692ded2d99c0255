// Copyright 2024 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A growable, cursor-based byte buffer staging data between a socket and
//! message framing: bytes from the wire are appended cheaply, structured
//! fields are read and written in network byte order, and length headers can
//! be inserted in front of data that is already written.
//!
//! ## How it works
//!
//! A [`Buffer`] owns one contiguous region and two cursors. Bytes between the
//! read and write cursors are *readable*; bytes after the write cursor are
//! *writable*; bytes before the read cursor are *prependable*. A fresh or
//! fully drained buffer parks both cursors at [`RESERVED_PREPEND`] rather
//! than zero, so a small header always fits in front of a payload without
//! shifting it.
//!
//! When an append outgrows the writable region, reclamation compacts before
//! it grows: if the dead space behind the read cursor plus the writable tail
//! can hold the append (keeping the reserve intact), the readable region
//! slides back to the reserve boundary; only otherwise does the backing
//! storage grow. Long-lived buffers cycling through fill and drain reuse
//! their own space instead of growing without bound, which keeps appends
//! amortized `O(1)`.
//!
//! ```
//! use netbuf::Buffer;
//!
//! let mut buf = Buffer::new();
//! buf.append(b"ping");
//! buf.prepend_u16(4)?; // length header, in front of the payload
//!
//! assert_eq!(buf.read_u16()?, 4);
//! assert_eq!(buf.retrieve_all_bytes(), b"ping");
//! # Ok::<(), netbuf::Error>(())
//! ```
//!
//! Buffers are single-owner and unsynchronized; share one across threads only
//! under external mutual exclusion. No method blocks or performs IO on its
//! own, and all integer codecs are big-endian. Little-endian wire formats are
//! out of scope.

mod buffer;
mod error;
mod std_io;

pub use buffer::{Buffer, FixedInt};
pub use error::{Error, ErrorKind, Operation, Result, Utf8Error};

/// Space kept ahead of the read cursor when a buffer is created or drained,
/// so length headers prepend without reallocation.
pub const RESERVED_PREPEND: usize = 8;

/// Default writable capacity hint used by [`Buffer::new`].
pub const DEFAULT_CAPACITY: usize = 1024;
