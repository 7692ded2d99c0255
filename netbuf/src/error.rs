// SPDX-License-Identifier: Apache-2.0

use std::error::Error as StdError;
use std::{fmt, io, result};
use std::fmt::Formatter;
use amplify_derive::Display;
use simdutf8::compat;

pub type ErrorBox = Box<dyn StdError + Send + Sync>;
pub type Result<T = ()> = result::Result<T, Error>;

/// The buffer operation an [`Error`] was raised in.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq)]
pub enum Operation {
	#[default]
	#[display("unknown operation")]
	Unknown,
	#[display("peek")]
	Peek,
	#[display("read")]
	Read,
	#[display("retrieve")]
	Retrieve,
	#[display("prepend")]
	Prepend,
	#[display("fill from reader")]
	Fill,
	#[display("drain into writer")]
	Drain,
}

/// The failure cause of an [`Error`].
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
	/// More bytes were requested than the readable region holds.
	#[display("{0} bytes requested with {1} readable")]
	Exhausted(usize, usize),
	/// A prepend was wider than the reserve ahead of the read cursor.
	#[display("{0} bytes prepended with {1} prependable")]
	ReserveOverflow(usize, usize),
	/// Bytes retrieved as a string were not valid UTF-8.
	#[display("invalid UTF-8")]
	InvalidUtf8,
	/// An IO error in a wrapped reader or writer.
	#[display("IO error")]
	Io,
}

/// A recoverable buffer error: a bounds violation on one of the buffer's
/// regions, a failed UTF-8 decode, or an IO error surfaced while filling or
/// draining. Failed operations leave the cursors where they were.
#[derive(Debug)]
pub struct Error {
	op: Operation,
	kind: ErrorKind,
	source: Option<ErrorBox>,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let Self { op, kind, source } = self;
		if let Some(source) = source {
			write!(f, "{op} failed; {kind} ({source})")
		} else {
			write!(f, "{op} failed; {kind}")
		}
	}
}

impl StdError for Error {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		if let Some(ref source) = self.source {
			Some(source.as_ref())
		} else {
			None
		}
	}
}

impl Error {
	pub(crate) fn new(op: Operation, kind: ErrorKind, source: Option<ErrorBox>) -> Self {
		Self { op, kind, source }
	}

	/// Creates a new readable-region bounds error.
	pub fn exhausted(op: Operation, requested: usize, available: usize) -> Self {
		Self::new(op, ErrorKind::Exhausted(requested, available), None)
	}

	/// Creates a new prepend-reserve bounds error.
	pub fn reserve_overflow(requested: usize, available: usize) -> Self {
		Self::new(Operation::Prepend, ErrorKind::ReserveOverflow(requested, available), None)
	}

	/// Creates a new UTF-8 decode error.
	pub fn invalid_utf8(op: Operation, error: Utf8Error) -> Self {
		Self::new(op, ErrorKind::InvalidUtf8, Some(error.into()))
	}

	/// Creates a new IO error.
	pub fn io(op: Operation, error: io::Error) -> Self {
		Self::new(op, ErrorKind::Io, Some(error.into()))
	}

	/// Returns the operation kind.
	pub fn operation(&self) -> Operation { self.op }

	/// Sets the operation kind.
	pub fn with_operation(mut self, op: Operation) -> Self {
		self.op = op;
		self
	}

	/// Returns the error kind.
	pub fn kind(&self) -> ErrorKind { self.kind }

	/// Returns the source downcast into an IO error, if possible.
	pub fn io_source(&self) -> Option<&io::Error> {
		self.source()?.downcast_ref()
	}
}

/// A UTF-8 decode error raised when retrieving strings.
#[derive(Copy, Clone, Debug, thiserror::Error)]
#[error("invalid UTF-8 byte sequence from index {valid_up_to}")]
pub struct Utf8Error {
	/// The length of the valid data before the error.
	pub valid_up_to: usize,
}

impl From<compat::Utf8Error> for Utf8Error {
	fn from(value: compat::Utf8Error) -> Self {
		Self { valid_up_to: value.valid_up_to() }
	}
}
