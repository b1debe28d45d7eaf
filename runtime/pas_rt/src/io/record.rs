use crate::collections::FixedArray;
use crate::scalar::{
    Boolean, Byte, Cardinal, Char, Double, Extended, Int64, Integer, Pointer, ShortInt, Single,
    SmallInt, UInt64, Word,
};

/// A fixed-size value stored in a typed binary file.
///
/// Scalars use their native width in little-endian byte order.
pub trait Record: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    fn encode(&self, out: &mut Vec<u8>);

    /// Decode from exactly [`Self::SIZE`] bytes.
    fn decode(bytes: &[u8]) -> Self;
}

macro_rules! le_record {
    ($($ty:ty => $native:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                const SIZE: usize = std::mem::size_of::<$native>();

                fn encode(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.raw().to_le_bytes());
                }

                fn decode(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$native>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    Self::new(<$native>::from_le_bytes(raw))
                }
            }
        )*
    };
}

le_record!(
    ShortInt => i8,
    SmallInt => i16,
    Integer => i32,
    Int64 => i64,
    Byte => u8,
    Word => u16,
    Cardinal => u32,
    UInt64 => u64,
    Single => f32,
    Double => f64,
    Extended => f64,
    Char => u16,
);

impl Record for Boolean {
    const SIZE: usize = 1;

    fn encode(&self, out: &mut Vec<u8>) {
        out.push(u8::from(self.raw()));
    }

    fn decode(bytes: &[u8]) -> Self {
        Self::new(bytes[0] != 0)
    }
}

/// Pointers are stored as 64-bit addresses.
impl Record for Pointer {
    const SIZE: usize = 8;

    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.address() as u64).to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> Self {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&bytes[..8]);
        Self::new(u64::from_le_bytes(raw) as usize)
    }
}

impl<R: Record, const N: usize> Record for FixedArray<R, N> {
    const SIZE: usize = R::SIZE * N;

    fn encode(&self, out: &mut Vec<u8>) {
        for item in self {
            item.encode(out);
        }
    }

    fn decode(bytes: &[u8]) -> Self {
        Self::new(std::array::from_fn(|i| {
            R::decode(&bytes[i * R::SIZE..(i + 1) * R::SIZE])
        }))
    }
}
