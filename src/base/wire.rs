//! Parsing and composing data in wire format.
//!
//! The [`Parser`] type wraps a message buffer together with a position and
//! only ever hands out data after checking that it actually lies within the
//! buffer. The [`Composer`] type collects output octets and refuses to grow
//! beyond the maximum message size. All multi-octet integers pass through
//! these two types and are converted between network byte order and the
//! system's own byte order on the way.

use core::fmt;

/// The number of octets in a message header.
pub const HEADER_SIZE: usize = 12;

/// The maximum size of a DNS message carried over UDP.
///
/// Messages are capped at this size both when parsing received datagrams
/// and when composing messages for sending.
pub const MAX_MESSAGE_SIZE: usize = 512;

//------------ Parser --------------------------------------------------------

/// A cursor over the octets of a DNS message.
///
/// The parser keeps the full message around even while it has progressed
/// into it since domain-name compression pointers refer to offsets from the
/// beginning of the message. A parser can be copied cheaply, which allows
/// following such pointers on a side copy without disturbing the position
/// in the original.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    /// The underlying octets of the full message.
    octets: &'a [u8],

    /// The current position of the parser from the beginning of `octets`.
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser atop a message buffer.
    #[must_use]
    pub fn from_ref(octets: &'a [u8]) -> Self {
        Parser { octets, pos: 0 }
    }

    /// Returns the current parse position as an index into the octets.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the length of the underlying octets sequence.
    ///
    /// This is _not_ the number of octets left for parsing. Use
    /// [`remaining`][Self::remaining] for that.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the underlying octets sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Returns the number of remaining octets to parse.
    pub fn remaining(&self) -> usize {
        self.octets.len() - self.pos
    }

    /// Checks that there are `len` octets left to parse.
    pub fn check_len(&self, len: usize) -> Result<(), ParseError> {
        if self.remaining() < len {
            Err(ParseError::TruncatedMessage)
        } else {
            Ok(())
        }
    }

    /// Repositions the parser to the given index.
    ///
    /// It is okay to reposition anywhere within the message. If `pos` is
    /// larger than the length of the message, an error is returned.
    pub fn seek(&mut self, pos: usize) -> Result<(), ParseError> {
        if pos > self.octets.len() {
            Err(ParseError::TruncatedMessage)
        } else {
            self.pos = pos;
            Ok(())
        }
    }

    /// Advances the parser's position by `len` octets.
    ///
    /// If this would take the parser beyond its end, an error is returned
    /// and the position is left untouched.
    pub fn advance(&mut self, len: usize) -> Result<(), ParseError> {
        if len > self.remaining() {
            Err(ParseError::TruncatedMessage)
        } else {
            self.pos += len;
            Ok(())
        }
    }

    /// Takes and returns the next `len` octets.
    ///
    /// Advances the parser by `len` octets. If there aren't enough octets
    /// left, leaves the parser untouched and returns an error instead.
    pub fn parse_octets(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        self.check_len(len)?;
        let res = &self.octets[self.pos..self.pos + len];
        self.pos += len;
        Ok(res)
    }

    /// Takes a `u8` from the beginning of the parser.
    pub fn parse_u8(&mut self) -> Result<u8, ParseError> {
        self.check_len(1)?;
        let res = self.octets[self.pos];
        self.pos += 1;
        Ok(res)
    }

    /// Takes a `u16` in network byte order from the parser.
    pub fn parse_u16(&mut self) -> Result<u16, ParseError> {
        let octets = self.parse_octets(2)?;
        Ok(u16::from_be_bytes([octets[0], octets[1]]))
    }

    /// Takes a `u32` in network byte order from the parser.
    pub fn parse_u32(&mut self) -> Result<u32, ParseError> {
        let octets = self.parse_octets(4)?;
        Ok(u32::from_be_bytes([octets[0], octets[1], octets[2], octets[3]]))
    }
}

//------------ Composer ------------------------------------------------------

/// A buffer for composing a wire-format DNS message.
///
/// The composer appends octets at the end and fails with
/// [`ComposeError::MessageTooLarge`] as soon as appending would grow the
/// message beyond [`MAX_MESSAGE_SIZE`]. Multi-octet integers are written in
/// network byte order.
#[derive(Clone, Debug, Default)]
pub struct Composer {
    octets: Vec<u8>,
}

impl Composer {
    /// Creates a new, empty composer.
    #[must_use]
    pub fn new() -> Self {
        Composer {
            octets: Vec::with_capacity(MAX_MESSAGE_SIZE),
        }
    }

    /// Returns the number of octets composed so far.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether nothing has been composed yet.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Returns a slice of the octets composed so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }

    /// Trades the composer in for the composed octets.
    pub fn into_octets(self) -> Vec<u8> {
        self.octets
    }

    /// Appends a slice of octets to the end of the message.
    pub fn append_slice(&mut self, slice: &[u8]) -> Result<(), ComposeError> {
        if self.octets.len() + slice.len() > MAX_MESSAGE_SIZE {
            Err(ComposeError::MessageTooLarge)
        } else {
            self.octets.extend_from_slice(slice);
            Ok(())
        }
    }

    /// Appends a single octet.
    pub fn append_u8(&mut self, value: u8) -> Result<(), ComposeError> {
        self.append_slice(&[value])
    }

    /// Appends a `u16` in network byte order.
    pub fn append_u16(&mut self, value: u16) -> Result<(), ComposeError> {
        self.append_slice(&value.to_be_bytes())
    }

    /// Appends a `u32` in network byte order.
    pub fn append_u32(&mut self, value: u32) -> Result<(), ComposeError> {
        self.append_slice(&value.to_be_bytes())
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to read beyond the end of the message.
    TruncatedMessage,

    /// A resource record declared more record data than the message holds.
    TruncatedRecord,

    /// A domain name could not be decoded.
    ///
    /// This covers bad label types, compression pointers that do not point
    /// strictly backwards, and names whose presentation form would grow
    /// beyond the allowed maximum.
    MalformedName,
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::TruncatedMessage => {
                f.write_str("unexpected end of message")
            }
            ParseError::TruncatedRecord => {
                f.write_str("record data exceeds message")
            }
            ParseError::MalformedName => f.write_str("malformed domain name"),
        }
    }
}

impl std::error::Error for ParseError {}

//------------ ComposeError --------------------------------------------------

/// An error happened while composing a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// A domain name label was longer than 63 octets or the name as a
    /// whole was longer than 253 characters.
    NameTooLong,

    /// A domain name contained an empty label.
    EmptyLabel,

    /// The composed message would exceed the maximum message size.
    MessageTooLarge,
}

//--- Display and Error

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::NameTooLong => f.write_str("domain name too long"),
            ComposeError::EmptyLabel => {
                f.write_str("empty domain name label")
            }
            ComposeError::MessageTooLarge => {
                f.write_str("message exceeds maximum size")
            }
        }
    }
}

impl std::error::Error for ComposeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_pos_seek_remaining() {
        let mut parser = Parser::from_ref(b"0123456789".as_ref());
        assert_eq!(parser.pos(), 0);
        assert_eq!(parser.remaining(), 10);
        assert_eq!(parser.seek(2), Ok(()));
        assert_eq!(parser.pos(), 2);
        assert_eq!(parser.remaining(), 8);
        assert_eq!(parser.seek(10), Ok(()));
        assert_eq!(parser.remaining(), 0);
        assert_eq!(parser.seek(11), Err(ParseError::TruncatedMessage));
        assert_eq!(parser.pos(), 10);
    }

    #[test]
    fn parse_advance() {
        let mut parser = Parser::from_ref(b"0123".as_ref());
        assert_eq!(parser.advance(3), Ok(()));
        assert_eq!(parser.advance(2), Err(ParseError::TruncatedMessage));
        assert_eq!(parser.pos(), 3);
        assert_eq!(parser.advance(1), Ok(()));
    }

    #[test]
    fn parse_integers() {
        let mut parser =
            Parser::from_ref(&[0x12, 0x01, 0x02, 0x01, 0x02, 0x03, 0x04][..]);
        assert_eq!(parser.parse_u8(), Ok(0x12));
        assert_eq!(parser.parse_u16(), Ok(0x0102));
        assert_eq!(parser.parse_u32(), Ok(0x01020304));
        assert_eq!(parser.parse_u8(), Err(ParseError::TruncatedMessage));
    }

    #[test]
    fn parse_octets() {
        let mut parser = Parser::from_ref(b"abcd".as_ref());
        assert_eq!(parser.parse_octets(2), Ok(b"ab".as_ref()));
        assert_eq!(parser.parse_octets(3), Err(ParseError::TruncatedMessage));
        assert_eq!(parser.pos(), 2);
        assert_eq!(parser.parse_octets(2), Ok(b"cd".as_ref()));
    }

    #[test]
    fn compose_integers() {
        let mut target = Composer::new();
        target.append_u8(0x12).unwrap();
        target.append_u16(0x0102).unwrap();
        target.append_u32(0x01020304).unwrap();
        assert_eq!(
            target.as_slice(),
            &[0x12, 0x01, 0x02, 0x01, 0x02, 0x03, 0x04]
        );
    }

    #[test]
    fn compose_max_size() {
        let mut target = Composer::new();
        target.append_slice(&[0; MAX_MESSAGE_SIZE]).unwrap();
        assert_eq!(target.append_u8(0), Err(ComposeError::MessageTooLarge));
        assert_eq!(target.len(), MAX_MESSAGE_SIZE);
    }
}
