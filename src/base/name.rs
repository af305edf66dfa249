//! Domain names.
//!
//! A domain name in a DNS message is a sequence of labels, each at most 63
//! octets long and prefixed by its length, terminated by the zero-length
//! root label. In order to keep messages small, a name may also end in (or
//! consist entirely of) a compression pointer: two octets with the top two
//! bits set whose remaining fourteen bits give the offset from the start of
//! the message at which the name continues.
//!
//! The [`Name`] type holds the presentation form of a name, i.e., the
//! labels joined by dots, and converts between that form and the wire
//! format. Parsing resolves compression; composing always writes the plain
//! label sequence and never emits pointers.

use super::wire::{ComposeError, Composer, ParseError, Parser};
use core::fmt;
use core::str::FromStr;

/// The maximum length of the presentation form of a domain name.
///
/// The wire format limits a name to 255 octets. Dropping the length prefix
/// of the first label and the root label leaves 253 characters of labels
/// and separating dots.
pub const MAX_NAME_LEN: usize = 253;

/// The maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// The label-type bits of the first octet of a label.
const LABEL_TYPE_MASK: u8 = 0xC0;

//------------ Name ----------------------------------------------------------

/// The presentation form of a domain name.
///
/// The wrapped string contains the labels of the name separated by dots
/// and without a trailing dot. The root name is the empty string. A name
/// acquired through [`parse`][Self::parse] or [`FromStr`] upholds the
/// length limits of the wire format; composing checks them again so that a
/// name constructed by other means cannot produce an invalid message.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Name(String);

impl Name {
    /// Creates the root name.
    #[must_use]
    pub fn root() -> Self {
        Name(String::new())
    }

    /// Returns the presentation form as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the name is the root name.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of octets the composed wire format will take.
    pub fn compose_len(&self) -> usize {
        if self.is_root() {
            1
        } else {
            self.0.len() + 2
        }
    }
}

/// # Parsing and Composing
///
impl Name {
    /// Parses a name from the wire format, resolving compression.
    ///
    /// On success, the parser rests at the first octet after the name in
    /// the original stream: one past the root label for a plain name, or
    /// one past the first compression pointer for a compressed name.
    /// Octets read after following a pointer never advance the original
    /// stream.
    ///
    /// Each pointer target must lie strictly before the previous one, with
    /// the position at which the name itself started as the initial bound.
    /// This guarantees termination on adversarial input; pointer loops and
    /// forward pointers fail with [`ParseError::MalformedName`].
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let start = parser.pos();
        let mut name = String::new();

        // Phase one: labels up to the root label or the first pointer.
        // This part advances the caller's stream position.
        let mut ptr = loop {
            match LabelType::parse(parser)? {
                LabelType::Normal(0) => return Ok(Name(name)),
                LabelType::Normal(label_len) => {
                    let label = parser.parse_octets(label_len.into())?;
                    Self::append_label(&mut name, label)?;
                }
                LabelType::Compressed(ptr) => break ptr,
            }
        };

        // Phase two: the rest of the name lives at earlier offsets. Work
        // on a copy of the parser so the caller's position stays fixed
        // right behind the first pointer.
        let mut parser = *parser;
        let mut bound = start;
        loop {
            if ptr >= bound {
                return Err(ParseError::MalformedName);
            }
            bound = ptr;
            parser.seek(ptr)?;
            loop {
                match LabelType::parse(&mut parser)? {
                    LabelType::Normal(0) => return Ok(Name(name)),
                    LabelType::Normal(label_len) => {
                        let label = parser.parse_octets(label_len.into())?;
                        Self::append_label(&mut name, label)?;
                    }
                    LabelType::Compressed(next) => {
                        ptr = next;
                        break;
                    }
                }
            }
        }
    }

    /// Appends a wire-format label to the presentation string.
    fn append_label(
        name: &mut String,
        label: &[u8],
    ) -> Result<(), ParseError> {
        for &ch in label {
            if !ch.is_ascii() || ch == b'.' {
                return Err(ParseError::MalformedName);
            }
        }
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(
            core::str::from_utf8(label)
                .map_err(|_| ParseError::MalformedName)?,
        );
        if name.len() > MAX_NAME_LEN {
            return Err(ParseError::MalformedName);
        }
        Ok(())
    }

    /// Composes the name as an uncompressed label sequence.
    pub fn compose(&self, target: &mut Composer) -> Result<(), ComposeError> {
        if self.0.len() > MAX_NAME_LEN {
            return Err(ComposeError::NameTooLong);
        }
        if !self.is_root() {
            for label in self.0.split('.') {
                if label.is_empty() {
                    return Err(ComposeError::EmptyLabel);
                }
                if label.len() > MAX_LABEL_LEN {
                    return Err(ComposeError::NameTooLong);
                }
                target.append_u8(label.len() as u8)?;
                target.append_slice(label.as_bytes())?;
            }
        }
        target.append_u8(0)
    }
}

//--- FromStr

impl FromStr for Name {
    type Err = ComposeError;

    /// Creates a name from its presentation form.
    ///
    /// A single trailing dot is accepted and dropped. The empty string and
    /// the sole dot both produce the root name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix('.').unwrap_or(s);
        if s.len() > MAX_NAME_LEN {
            return Err(ComposeError::NameTooLong);
        }
        if !s.is_empty() {
            for label in s.split('.') {
                if label.is_empty() {
                    return Err(ComposeError::EmptyLabel);
                }
                if label.len() > MAX_LABEL_LEN {
                    return Err(ComposeError::NameTooLong);
                }
            }
        }
        Ok(Name(s.into()))
    }
}

//--- AsRef and Display

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//------------ LabelType -----------------------------------------------------

/// The type of a label read from the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LabelType {
    /// A normal label with the given length.
    Normal(u8),

    /// A compression pointer to the given message offset.
    Compressed(usize),
}

impl LabelType {
    /// Parses the label header at the parser's position.
    ///
    /// The two reserved label types with only one of the top bits set are
    /// rejected.
    fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let octet = parser.parse_u8()?;
        match octet & LABEL_TYPE_MASK {
            0 => Ok(LabelType::Normal(octet)),
            0xC0 => {
                let low = parser.parse_u8()?;
                Ok(LabelType::Compressed(
                    usize::from(octet & !LABEL_TYPE_MASK) << 8
                        | usize::from(low),
                ))
            }
            _ => Err(ParseError::MalformedName),
        }
    }
}

//============ Testing =======================================================
