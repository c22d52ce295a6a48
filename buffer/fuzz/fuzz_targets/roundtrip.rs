#![no_main]

use arbitrary::Arbitrary;
use commonware_buffer::{ByteStore, Pack, Padding, Unpacker};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Field {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Pad(u8),
    Buffer(Vec<u8>),
    Sequence(Vec<u32>),
    Array([u8; 7]),
}

fn pack(fields: &[Field]) -> ByteStore {
    let mut store = ByteStore::new();
    let mut packer = store.pack();
    for field in fields {
        match field {
            Field::U8(v) => packer.u8(*v),
            Field::U16(v) => packer.u16(*v),
            Field::U32(v) => packer.u32(*v),
            Field::U64(v) => packer.u64(*v),
            Field::I8(v) => packer.i8(*v),
            Field::I16(v) => packer.i16(*v),
            Field::I32(v) => packer.i32(*v),
            Field::I64(v) => packer.i64(*v),
            Field::Pad(n) => packer.put(&Padding(*n as usize)),
            Field::Buffer(bytes) => packer.buffer(bytes),
            Field::Sequence(items) => packer.sequence(items),
            Field::Array(array) => packer.put(array),
        };
    }
    store
}

fn packed_size(field: &Field) -> usize {
    match field {
        Field::U8(v) => v.packed_size(),
        Field::U16(v) => v.packed_size(),
        Field::U32(v) => v.packed_size(),
        Field::U64(v) => v.packed_size(),
        Field::I8(v) => v.packed_size(),
        Field::I16(v) => v.packed_size(),
        Field::I32(v) => v.packed_size(),
        Field::I64(v) => v.packed_size(),
        Field::Pad(n) => *n as usize,
        Field::Buffer(bytes) => 4 + bytes.len(),
        Field::Sequence(items) => items.packed_size(),
        Field::Array(array) => array.packed_size(),
    }
}

fn check(up: &mut Unpacker<'_>, field: &Field) {
    match field {
        Field::U8(v) => assert_eq!(up.u8().unwrap(), *v),
        Field::U16(v) => assert_eq!(up.u16().unwrap(), *v),
        Field::U32(v) => assert_eq!(up.u32().unwrap(), *v),
        Field::U64(v) => assert_eq!(up.u64().unwrap(), *v),
        Field::I8(v) => assert_eq!(up.i8().unwrap(), *v),
        Field::I16(v) => assert_eq!(up.i16().unwrap(), *v),
        Field::I32(v) => assert_eq!(up.i32().unwrap(), *v),
        Field::I64(v) => assert_eq!(up.i64().unwrap(), *v),
        Field::Pad(n) => {
            up.pad(Padding(*n as usize)).unwrap();
        }
        Field::Buffer(bytes) => assert_eq!(up.buffer().unwrap(), &bytes[..]),
        Field::Sequence(items) => assert_eq!(&up.get::<Vec<u32>>().unwrap(), items),
        Field::Array(array) => assert_eq!(&up.get::<[u8; 7]>().unwrap(), array),
    }
}

fuzz_target!(|fields: Vec<Field>| {
    // Lengths beyond the prefix width panic by contract
    if fields.iter().any(|f| match f {
        Field::Sequence(items) => items.len() > u16::MAX as usize,
        Field::Buffer(bytes) => bytes.len() > u32::MAX as usize,
        _ => false,
    }) {
        return;
    }

    let store = pack(&fields);
    let expected: usize = fields.iter().map(packed_size).sum();
    assert_eq!(store.size(), expected);

    let mut up = store.unpack();
    for field in &fields {
        let before = up.remain();
        check(&mut up, field);
        assert_eq!(before - up.remain(), packed_size(field));
    }
    up.finish().unwrap();
});
