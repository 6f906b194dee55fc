use alloc::string::{String, ToString};
use core::{fmt, num::ParseIntError};

/// Which part of a packed value an overflow refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Tens,
    Units,
    /// The whole packed value, against the width of the packed type.
    Packed,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Tens => f.write_str("tens"),
            Field::Units => f.write_str("units"),
            Field::Packed => f.write_str("packed"),
        }
    }
}

#[derive(PartialEq, Eq)]
pub enum Error {
    FieldOverflow { field: Field, bits: u32 },
    SignLost,
    InvalidNumber(String),
    OutOfRange { value: i128, target: &'static str },
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FieldOverflow { field, bits } => {
                write!(f, "FieldOverflow({field:?}, {bits})")
            }
            Error::SignLost => write!(f, "SignLost"),
            Error::InvalidNumber(msg) => write!(f, "InvalidNumber({})", msg),
            Error::OutOfRange { value, target } => write!(f, "OutOfRange({value}, {target})"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FieldOverflow { field, bits } => {
                write!(f, "Value of the {field} field does not fit in {bits} bits")
            }
            Error::SignLost => {
                write!(f, "Negative values can not be packed without losing the sign")
            }
            Error::InvalidNumber(msg) => write!(f, "Invalid number: {}", msg),
            Error::OutOfRange { value, target } => {
                write!(f, "Value {value} is out of range for {target}")
            }
        }
    }
}

impl core::error::Error for Error {}

impl From<ParseIntError> for Error {
    fn from(value: ParseIntError) -> Self {
        Self::InvalidNumber(value.to_string())
    }
}
