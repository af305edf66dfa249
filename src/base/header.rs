//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet header carrying the message
//! id, a set of bit-packed flags, and the number of entries in each of the
//! four sections that follow. Its content and format are defined in
//! section 4.1.1 of RFC 1035:
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    QDCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    ANCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    NSCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

use super::iana::{Opcode, Rcode};
use super::wire::{
    ComposeError, Composer, ParseError, Parser, HEADER_SIZE,
};

/// Masks for the flag octet covering QR through RD.
const QR_MASK: u8 = 0b1000_0000;
const OPCODE_MASK: u8 = 0b0111_1000;
const AA_MASK: u8 = 0b0000_0100;
const TC_MASK: u8 = 0b0000_0010;
const RD_MASK: u8 = 0b0000_0001;

/// Masks for the flag octet covering RA through RCODE.
const RA_MASK: u8 = 0b1000_0000;
const Z_MASK: u8 = 0b0111_0000;
const RCODE_MASK: u8 = 0b0000_1111;

//------------ Header --------------------------------------------------------

/// The header of a DNS message.
///
/// The section counts state how many entries the corresponding section of
/// the message holds. When parsing they drive how many entries the parser
/// expects; when composing a whole message they are derived from the
/// actual section lengths.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Header {
    /// An identifier copied from a query into its response.
    pub id: u16,

    /// Whether the message is a response.
    pub qr: bool,

    /// The kind of query the message contains.
    pub opcode: Opcode,

    /// Whether the responding server is authoritative for the name.
    pub aa: bool,

    /// Whether the response had to be truncated.
    pub tc: bool,

    /// Whether the client asks the server to recurse.
    pub rd: bool,

    /// Whether the server supports recursion.
    pub ra: bool,

    /// The reserved bits. Three bits wide, zero in well-formed messages.
    pub z: u8,

    /// The outcome of processing the query.
    pub rcode: Rcode,

    /// The number of entries in the question section.
    pub qdcount: u16,

    /// The number of entries in the answer section.
    pub ancount: u16,

    /// The number of entries in the authority section.
    pub nscount: u16,

    /// The number of entries in the additional section.
    pub arcount: u16,
}

impl Header {
    /// Creates a new header with all fields zero or false.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id field to a randomly chosen number.
    ///
    /// Randomizing the id of outgoing queries makes spoofed responses
    /// harder to produce.
    pub fn set_random_id(&mut self) {
        self.id = rand::random()
    }

    /// Parses the header from the beginning of a message.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        parser.check_len(HEADER_SIZE)?;
        let id = parser.parse_u16()?;
        let flags = parser.parse_u8()?;
        let more_flags = parser.parse_u8()?;
        Ok(Header {
            id,
            qr: flags & QR_MASK != 0,
            opcode: Opcode::from_int((flags & OPCODE_MASK) >> 3),
            aa: flags & AA_MASK != 0,
            tc: flags & TC_MASK != 0,
            rd: flags & RD_MASK != 0,
            ra: more_flags & RA_MASK != 0,
            z: (more_flags & Z_MASK) >> 4,
            rcode: Rcode::from_int(more_flags & RCODE_MASK),
            qdcount: parser.parse_u16()?,
            ancount: parser.parse_u16()?,
            nscount: parser.parse_u16()?,
            arcount: parser.parse_u16()?,
        })
    }

    /// Composes the header in wire format.
    pub fn compose(&self, target: &mut Composer) -> Result<(), ComposeError> {
        target.append_u16(self.id)?;
        let mut flags = (self.opcode.to_int() << 3) & OPCODE_MASK;
        if self.qr {
            flags |= QR_MASK;
        }
        if self.aa {
            flags |= AA_MASK;
        }
        if self.tc {
            flags |= TC_MASK;
        }
        if self.rd {
            flags |= RD_MASK;
        }
        target.append_u8(flags)?;
        let mut more_flags = (self.z << 4) & Z_MASK;
        if self.ra {
            more_flags |= RA_MASK;
        }
        more_flags |= self.rcode.to_int() & RCODE_MASK;
        target.append_u8(more_flags)?;
        target.append_u16(self.qdcount)?;
        target.append_u16(self.ancount)?;
        target.append_u16(self.nscount)?;
        target.append_u16(self.arcount)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let octets = [
            0x01, 0x01, 0x8f, 0xb3, 0x01, 0x02, 0x01, 0x03, 0x01, 0x04,
            0x01, 0x05,
        ];
        let mut parser = Parser::from_ref(&octets[..]);
        let header = Header::parse(&mut parser).unwrap();
        assert_eq!(parser.pos(), HEADER_SIZE);
        assert_eq!(
            header,
            Header {
                id: 257,
                qr: true,
                opcode: Opcode::IQUERY,
                aa: true,
                tc: true,
                rd: true,
                ra: true,
                z: 3,
                rcode: Rcode::NXDOMAIN,
                qdcount: 258,
                ancount: 259,
                nscount: 260,
                arcount: 261,
            }
        );
    }

    #[test]
    fn parse_short_buffer_fails() {
        let mut parser = Parser::from_ref(&[0u8; 11][..]);
        assert_eq!(
            Header::parse(&mut parser),
            Err(ParseError::TruncatedMessage)
        );
    }

    #[test]
    fn compose() {
        let header = Header {
            id: 257,
            qr: true,
            opcode: Opcode::STATUS,
            aa: true,
            tc: true,
            rd: true,
            ra: true,
            z: 1,
            rcode: Rcode::REFUSED,
            ..Default::default()
        };
        let mut target = Composer::new();
        header.compose(&mut target).unwrap();
        assert_eq!(
            target.as_slice(),
            &[
                0x01, 0x01, 0x97, 0x95, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00
            ]
        );
    }

    #[test]
    fn compose_parse_roundtrip() {
        let header = Header {
            id: 0xbeef,
            qr: true,
            opcode: Opcode::QUERY,
            rd: true,
            ra: true,
            rcode: Rcode::NOERROR,
            qdcount: 1,
            ancount: 2,
            ..Default::default()
        };
        let mut target = Composer::new();
        header.compose(&mut target).unwrap();
        let mut parser = Parser::from_ref(target.as_slice());
        assert_eq!(Header::parse(&mut parser), Ok(header));
    }
}
