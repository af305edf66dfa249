//! Resource records.
//!
//! All three record sections of a DNS message, answer, authority, and
//! additional, share the same entry shape: a domain name, type, class,
//! time-to-live, and a length-prefixed blob of record data. The codec
//! treats the record data as opaque octets; its interpretation depends on
//! the record type and is the caller's business.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{ComposeError, Composer, ParseError, Parser};
use bytes::Bytes;
use core::fmt;

//------------ Record --------------------------------------------------------

/// A resource record of a DNS message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The domain name the record pertains to.
    pub name: Name,

    /// The type of the record.
    pub rtype: Rtype,

    /// The class of the record.
    pub class: Class,

    /// The number of seconds the record may be cached.
    pub ttl: u32,

    /// The record data. Opaque; its meaning depends on `rtype`.
    pub data: Bytes,
}

impl Record {
    /// Creates a new record from its components.
    pub fn new(
        name: Name,
        rtype: Rtype,
        class: Class,
        ttl: u32,
        data: Bytes,
    ) -> Self {
        Record {
            name,
            rtype,
            class,
            ttl,
            data,
        }
    }
}

/// # Parsing and Composing
///
impl Record {
    /// Parses a record from the wire format.
    ///
    /// The record data is copied out of the message so the record can
    /// outlive the buffer it was parsed from. A data length reaching past
    /// the end of the message fails with [`ParseError::TruncatedRecord`].
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let name = Name::parse(parser)?;
        let rtype = Rtype::from_int(parser.parse_u16()?);
        let class = Class::from_int(parser.parse_u16()?);
        let ttl = parser.parse_u32()?;
        let rdlen = usize::from(parser.parse_u16()?);
        let data = parser
            .parse_octets(rdlen)
            .map_err(|_| ParseError::TruncatedRecord)?;
        Ok(Record {
            name,
            rtype,
            class,
            ttl,
            data: Bytes::copy_from_slice(data),
        })
    }

    /// Composes the record in wire format.
    pub fn compose(&self, target: &mut Composer) -> Result<(), ComposeError> {
        self.name.compose(target)?;
        target.append_u16(self.rtype.to_int())?;
        target.append_u16(self.class.to_int())?;
        target.append_u32(self.ttl)?;
        let rdlen = u16::try_from(self.data.len())
            .map_err(|_| ComposeError::MessageTooLarge)?;
        target.append_u16(rdlen)?;
        target.append_slice(&self.data)
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.\t{}\t{}\t{}\t{} octets",
            self.name,
            self.ttl,
            self.class,
            self.rtype,
            self.data.len()
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parse() {
        let octets = b"\x04test\x03com\x00\x00\x01\x00\x01\
            \x00\x00\x01\x01\x00\x04\x01\x02\x03\x04";
        let mut parser = Parser::from_ref(&octets[..]);
        let record = Record::parse(&mut parser).unwrap();
        assert_eq!(record.name.as_str(), "test.com");
        assert_eq!(record.rtype, Rtype::A);
        assert_eq!(record.class, Class::IN);
        assert_eq!(record.ttl, 257);
        assert_eq!(record.data.as_ref(), &[1, 2, 3, 4]);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn parse_truncated_data_fails() {
        // Declares four octets of record data but delivers two.
        let octets = b"\x04test\x03com\x00\x00\x01\x00\x01\
            \x00\x00\x01\x01\x00\x04\x01\x02";
        let mut parser = Parser::from_ref(&octets[..]);
        assert_eq!(
            Record::parse(&mut parser),
            Err(ParseError::TruncatedRecord)
        );
    }

    #[test]
    fn compose() {
        let record = Record::new(
            Name::from_str("test.com").unwrap(),
            Rtype::A,
            Class::IN,
            65537,
            Bytes::from_static(&[1, 2, 3, 4]),
        );
        let mut target = Composer::new();
        record.compose(&mut target).unwrap();
        assert_eq!(
            target.as_slice(),
            b"\x04test\x03com\x00\x00\x01\x00\x01\
                \x00\x01\x00\x01\x00\x04\x01\x02\x03\x04"
        );
    }
}
