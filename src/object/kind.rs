use std::fmt::{self, Display, Formatter};

use super::Error;

/// Describes the fundamental object type (blob or tree).
/// We use the word `kind` here to avoid conflict with the Rust reserved word `type`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    Blob,
    Tree,
}

impl Kind {
    /// Parse the ASCII type tag found in a stored object header.
    ///
    /// Anything other than a known tag is an error; the store never
    /// guesses at an object's type.
    pub fn from_tag(tag: &[u8]) -> Result<Kind, Error> {
        match tag {
            b"blob" => Ok(Kind::Blob),
            b"tree" => Ok(Kind::Tree),
            _ => Err(Error::UnknownKind(
                String::from_utf8_lossy(tag).into_owned(),
            )),
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Kind::Blob => write!(f, "blob"),
            Kind::Tree => write!(f, "tree"),
        }
    }
}
