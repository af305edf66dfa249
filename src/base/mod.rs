//! Basics.
//!
//! This module provides the types for working with DNS message data and
//! the means to extract that data from wire-format messages and to
//! assemble such messages.
//!
//! We use the term *parsing* for extracting data from the wire-format
//! representation and *composing* for producing such a representation.
//! The fundamental types for both live in the [wire] submodule: a
//! [`Parser`][wire::Parser] is a cursor over a message buffer that checks
//! every advance against the buffer bounds, and a
//! [`Composer`][wire::Composer] is a growable output buffer capped at the
//! maximum message size.
//!
//! The components of a message each have their own submodule:
//!
//! * [header] for the twelve octet message header,
//! * [name] for domain names including wire-format compression,
//! * [question] for entries of the question section,
//! * [record] for resource records with opaque record data, and
//! * [message] for whole messages tying the sections together.
//!
//! The [iana] submodule collects types for the DNS parameters registered
//! with IANA, such as record types and classes.

pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;

pub use self::header::Header;
pub use self::message::Message;
pub use self::name::Name;
pub use self::question::Question;
pub use self::record::Record;
