//! Compact encodings for primitive values.

use super::{CodecError, CriticalValue, Encoding};

macro_rules! fixed_width {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl CriticalValue for $ty {
                const ENCODING: Encoding = Encoding::Compact;

                fn encode(&self) -> Result<Vec<u8>, CodecError> {
                    Ok(self.to_le_bytes().to_vec())
                }

                fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
                    let array = bytes.try_into().map_err(|_| CodecError::Length {
                        type_name: stringify!($ty),
                        expected: std::mem::size_of::<$ty>(),
                        actual: bytes.len(),
                    })?;
                    Ok(<$ty>::from_le_bytes(array))
                }
            }
        )+
    };
}

fixed_width!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl CriticalValue for bool {
    const ENCODING: Encoding = Encoding::Compact;

    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        Ok(vec![u8::from(*self)])
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        match bytes {
            [0] => Ok(false),
            [1] => Ok(true),
            [_] => Err(CodecError::Malformed { type_name: "bool" }),
            _ => Err(CodecError::Length {
                type_name: "bool",
                expected: 1,
                actual: bytes.len(),
            }),
        }
    }
}

impl CriticalValue for String {
    const ENCODING: Encoding = Encoding::Compact;

    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        Ok(self.as_bytes().to_vec())
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

impl CriticalValue for Vec<u8> {
    const ENCODING: Encoding = Encoding::Compact;

    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        Ok(self.clone())
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bytes.to_vec())
    }
}
