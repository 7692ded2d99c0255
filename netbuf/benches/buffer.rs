// SPDX-License-Identifier: Apache-2.0

use std::mem;
use criterion::{black_box, Criterion, criterion_group, criterion_main};
use netbuf::{Buffer, DEFAULT_CAPACITY};

const DATA: &[u8] = &[0x5A; DEFAULT_CAPACITY];

fn append_slice(c: &mut Criterion) {
	c.bench_function("append_slice", |b| b.iter(|| {
		let mut buf = Buffer::new();
		buf.append(DATA);
		buf
	}));
}

fn fill_drain_cycle(c: &mut Criterion) {
	let mut buf = Buffer::new();
	c.bench_function("fill_drain_cycle", |b| b.iter(|| {
		buf.append(DATA);
		buf.retrieve(DATA.len() / 2);
		buf.append(&DATA[..DATA.len() / 2]);
		buf.retrieve_all();
	}));
}

fn frame_message(c: &mut Criterion) {
	let mut buf = Buffer::new();
	c.bench_function("frame_message", |b| b.iter(|| {
		buf.append(&DATA[..256]);
		buf.prepend_u32(256).unwrap();
		let len = buf.read_u32().unwrap() as usize;
		buf.retrieve(black_box(len));
	}));
}

fn append_numbers(c: &mut Criterion) {
	let mut group = c.benchmark_group("append_numbers");
	let mut buffer = Buffer::new();

	macro_rules! gen {
		($($fn:ident $ty:ident),+) => {
			$(
			group.bench_function(stringify!($fn), |b| b.iter(|| {
				for _ in 0..DEFAULT_CAPACITY / mem::size_of::<$ty>() {
					buffer.$fn(black_box($ty::MAX));
				}
				buffer.retrieve_all();
			}));
			)+
		};
	}

	gen!(
		append_u8 u8,
		append_u16 u16,
		append_u32 u32,
		append_u64 u64
	);
}

fn read_numbers(c: &mut Criterion) {
	let mut group = c.benchmark_group("read_numbers");

	macro_rules! gen {
		($($fn:ident $ty:ident),+) => {
			$(
			group.bench_function(stringify!($fn), |b| b.iter(|| {
				let mut buf = Buffer::from_slice(DATA);
				for _ in 0..DEFAULT_CAPACITY / mem::size_of::<$ty>() {
					let _ = black_box(buf.$fn());
				}
			}));
			)+
		};
	}

	gen!(
		read_u8 u8,
		read_u16 u16,
		read_u32 u32,
		read_u64 u64
	);
}

criterion_group!(benches, append_slice, fill_drain_cycle, frame_message, append_numbers, read_numbers);
criterion_main!(benches);
