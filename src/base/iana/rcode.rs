//! DNS response codes.

int_enum! {
    /// DNS response codes.
    ///
    /// The rcode of a response header states what happened when the server
    /// processed the query. The field is four bits wide in the wire format.
    =>
    Rcode, u8;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// The server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// The server failed while processing the query.
    (SERVFAIL => 2, "SERVFAIL")

    /// The queried domain name does not exist.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// The server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// The server refused to perform the operation.
    (REFUSED => 5, "REFUSED")
}

impl Default for Rcode {
    fn default() -> Self {
        Rcode::NOERROR
    }
}
