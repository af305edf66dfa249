//! DNS class values.

int_enum! {
    /// DNS class values.
    ///
    /// The class of a record nominally describes the protocol family the
    /// record belongs to. In practice everything is Internet class; the
    /// question section additionally allows the wildcard class ANY.
    =>
    Class, u16;

    /// The Internet.
    (IN => 1, "IN")

    /// The CSNET class. Obsolete.
    (CS => 2, "CS")

    /// The CHAOS class.
    (CH => 3, "CH")

    /// Hesiod.
    (HS => 4, "HS")

    /// Any class. Query only.
    (ANY => 255, "ANY")
}
