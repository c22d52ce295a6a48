#![no_main]

use arbitrary::Arbitrary;
use commonware_buffer::{ByteStore, Error, Limits, Unpacker};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Read {
    U8,
    U16,
    U32,
    U64,
    Skip(u16),
    Take(u16),
    Buffer,
    Sequence16,
    Sequence64,
}

#[derive(Arbitrary, Debug)]
struct Input {
    data: Vec<u8>,
    max_buffer: u16,
    max_sequence: u16,
    reads: Vec<Read>,
}

fn apply(up: &mut Unpacker<'_>, read: &Read) -> Result<(), Error> {
    match read {
        Read::U8 => up.u8().map(drop),
        Read::U16 => up.u16().map(drop),
        Read::U32 => up.u32().map(drop),
        Read::U64 => up.u64().map(drop),
        Read::Skip(n) => up.skip(*n as usize).map(drop),
        Read::Take(n) => {
            let mut dst = ByteStore::new();
            up.sized(*n as usize, &mut dst)?;
            assert_eq!(dst.size(), *n as usize);
            Ok(())
        }
        Read::Buffer => up.buffer().map(drop),
        Read::Sequence16 => up.get::<Vec<u16>>().map(drop),
        Read::Sequence64 => up.get::<Vec<u64>>().map(drop),
    }
}

fuzz_target!(|input: Input| {
    let limits = Limits::default()
        .with_max_buffer(input.max_buffer as usize)
        .with_max_sequence(input.max_sequence as usize);
    let mut up = Unpacker::with_limits(&input.data, limits);
    for read in &input.reads {
        let (offset, remain) = (up.offset(), up.remain());
        match apply(&mut up, read) {
            Ok(()) => assert!(up.offset() >= offset),
            Err(_) => {
                // Failed reads never move the cursor
                assert_eq!(up.offset(), offset);
                assert_eq!(up.remain(), remain);
            }
        }
        assert_eq!(up.offset() + up.remain(), input.data.len());
    }
});
