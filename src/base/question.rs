//! A single question in a DNS message.
//!
//! In DNS, a question describes what is requested in a query: a domain
//! name, a record type, and a class.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{ComposeError, Composer, ParseError, Parser};
use core::fmt;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    /// The domain name of the question.
    pub qname: Name,

    /// The record type of the question.
    pub qtype: Rtype,

    /// The class of the question.
    pub qclass: Class,
}

impl Question {
    /// Creates a new question from its three components.
    pub fn new(qname: Name, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming
    /// class IN.
    pub fn new_in(qname: Name, qtype: Rtype) -> Self {
        Question::new(qname, qtype, Class::IN)
    }
}

/// # Parsing and Composing
///
impl Question {
    /// Parses a question from the wire format.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Question {
            qname: Name::parse(parser)?,
            qtype: Rtype::from_int(parser.parse_u16()?),
            qclass: Class::from_int(parser.parse_u16()?),
        })
    }

    /// Composes the question in wire format.
    pub fn compose(&self, target: &mut Composer) -> Result<(), ComposeError> {
        self.qname.compose(target)?;
        target.append_u16(self.qtype.to_int())?;
        target.append_u16(self.qclass.to_int())
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parse() {
        let octets = b"\x04test\x03com\x00\x00\x01\x00\x01\xff";
        let mut parser = Parser::from_ref(&octets[..]);
        let question = Question::parse(&mut parser).unwrap();
        assert_eq!(question.qname.as_str(), "test.com");
        assert_eq!(question.qtype, Rtype::A);
        assert_eq!(question.qclass, Class::IN);
        assert_eq!(parser.remaining(), 1);
    }

    #[test]
    fn parse_truncated_fails() {
        let octets = b"\x04test\x03com\x00\x00\x01";
        let mut parser = Parser::from_ref(&octets[..]);
        assert_eq!(
            Question::parse(&mut parser),
            Err(ParseError::TruncatedMessage)
        );
    }

    #[test]
    fn compose() {
        let question = Question::new(
            Name::from_str("test.com").unwrap(),
            Rtype::ANY,
            Class::ANY,
        );
        let mut target = Composer::new();
        question.compose(&mut target).unwrap();
        assert_eq!(
            target.as_slice(),
            b"\x04test\x03com\x00\x00\xff\x00\xff"
        );
    }
}
