//! Whole DNS messages.
//!
//! A DNS message consists of a [`Header`] followed by four sections: the
//! questions and then the answer, authority, and additional records. The
//! header's section counts state how many entries each section holds.
//!
//! [`Message::parse`] decodes a complete message from a received datagram
//! and [`Message::compose`] produces the wire format of a message built in
//! memory. When composing, the section counts of the header are derived
//! from the actual section lengths rather than taken from the header.

use super::header::Header;
use super::iana::Rtype;
use super::name::Name;
use super::question::Question;
use super::record::Record;
use super::wire::{ComposeError, Composer, ParseError, Parser};

//------------ Message -------------------------------------------------------

/// A DNS message.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    /// The message header.
    pub header: Header,

    /// The question section.
    pub questions: Vec<Question>,

    /// The answer section.
    pub answers: Vec<Record>,

    /// The authority section.
    pub authorities: Vec<Record>,

    /// The additional section.
    pub additionals: Vec<Record>,
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for the given name and record type.
    ///
    /// The query carries a random message id, has the recursion desired
    /// flag set, and asks a single class IN question.
    pub fn query(qname: Name, qtype: Rtype) -> Self {
        let mut res = Self::new();
        res.header.set_random_id();
        res.header.rd = true;
        res.questions.push(Question::new_in(qname, qtype));
        res
    }
}

/// # Parsing and Composing
///
impl Message {
    /// Parses a message from the octets of a received datagram.
    ///
    /// All four sections are decoded eagerly, with the header's counts
    /// stating how many entries each section holds. If any part of the
    /// message is malformed, the whole message is rejected.
    pub fn parse(octets: &[u8]) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(octets);
        let header = Header::parse(&mut parser)?;
        let questions = Self::parse_questions(&mut parser, header.qdcount)?;
        let answers = Self::parse_records(&mut parser, header.ancount)?;
        let authorities = Self::parse_records(&mut parser, header.nscount)?;
        let additionals = Self::parse_records(&mut parser, header.arcount)?;
        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    fn parse_questions(
        parser: &mut Parser<'_>,
        count: u16,
    ) -> Result<Vec<Question>, ParseError> {
        let mut res = Vec::with_capacity(count.into());
        for _ in 0..count {
            res.push(Question::parse(parser)?);
        }
        Ok(res)
    }

    fn parse_records(
        parser: &mut Parser<'_>,
        count: u16,
    ) -> Result<Vec<Record>, ParseError> {
        let mut res = Vec::with_capacity(count.into());
        for _ in 0..count {
            res.push(Record::parse(parser)?);
        }
        Ok(res)
    }

    /// Composes the message in wire format.
    ///
    /// The section counts written into the header are taken from the
    /// lengths of the sections themselves. The result is capped at the
    /// maximum message size.
    pub fn compose(&self) -> Result<Vec<u8>, ComposeError> {
        let mut target = Composer::new();
        let mut header = self.header;
        header.qdcount = Self::section_count(self.questions.len())?;
        header.ancount = Self::section_count(self.answers.len())?;
        header.nscount = Self::section_count(self.authorities.len())?;
        header.arcount = Self::section_count(self.additionals.len())?;
        header.compose(&mut target)?;
        for question in &self.questions {
            question.compose(&mut target)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.compose(&mut target)?;
        }
        Ok(target.into_octets())
    }

    fn section_count(len: usize) -> Result<u16, ComposeError> {
        u16::try_from(len).map_err(|_| ComposeError::MessageTooLarge)
    }
}

//============ Testing =======================================================
