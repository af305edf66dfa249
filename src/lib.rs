//! A DNS wire-format codec and stub resolver.
//!
//! This crate provides the building blocks for a minimal DNS client: the
//! [base] module contains types for the components of a DNS message,
//! header, questions, and resource records, together with the code to parse
//! them from and compose them into the RFC 1035 wire format, including
//! domain-name decompression. The [resolv] module contains a small blocking
//! stub resolver that sends a composed query to a configured server over
//! UDP and parses whatever comes back.
//!
//! Parsing and composing both happen on buffers holding a complete DNS
//! message. This is a reasonable choice given the limited size of DNS
//! messages and the complexities introduced by compressing domain names
//! through references to other parts of the message.
//!
//! The codec is deliberately conservative: resource record data is kept as
//! opaque octets, the composer never emits compression pointers, and
//! messages are capped at the classic 512 octet UDP limit.

pub mod base;
pub mod resolv;
