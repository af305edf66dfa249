//! DNS operation codes.

int_enum! {
    /// DNS operation codes.
    ///
    /// The opcode of a message header states the kind of query the message
    /// contains. The field is four bits wide in the wire format; only the
    /// three values from RFC 1035 have constants.
    =>
    Opcode, u8;

    /// A standard query.
    (QUERY => 0, "QUERY")

    /// An inverse query. Obsolete.
    (IQUERY => 1, "IQUERY")

    /// A server status request.
    (STATUS => 2, "STATUS")
}

impl Default for Opcode {
    fn default() -> Self {
        Opcode::QUERY
    }
}
