//! Resource record types.

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind
    /// of data it carries. The same values are used in the question
    /// section, where a few additional query-only types are allowed as
    /// well. The values defined in RFC 1035 plus the IPv6 address type of
    /// RFC 3596 are given constants here; the codec passes every other
    /// value through unharmed.
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination. Obsolete, use MX.
    (MD => 3, "MD")

    /// A mail forwarder. Obsolete, use MX.
    (MF => 4, "MF")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A mailbox domain name.
    (MB => 7, "MB")

    /// A mail group member.
    (MG => 8, "MG")

    /// A mail rename domain name.
    (MR => 9, "MR")

    /// A null resource record.
    (NULL => 10, "NULL")

    /// A well known service description.
    (WKS => 11, "WKS")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// An IPv6 host address.
    (AAAA => 28, "AAAA")

    /// A request for a transfer of an entire zone. Query only.
    (AXFR => 252, "AXFR")

    /// A request for mailbox-related records. Query only.
    (MAILB => 253, "MAILB")

    /// A request for mail agent records. Obsolete, query only.
    (MAILA => 254, "MAILA")

    /// A request for all records. Query only.
    (ANY => 255, "ANY")
}
