//! Sending queries to an upstream server.
//!
//! [`StubResolver`] implements the client side of the DNS protocol over
//! UDP: it composes a query message, sends it to a configured server, and
//! waits for a response that matches the query. It does not recurse itself
//! but relies on the upstream server to do so, which is why it is called a
//! stub resolver.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::wire::{ComposeError, ParseError, MAX_MESSAGE_SIZE};
use crate::base::Message;
use std::io;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;

/// The time to wait for a response before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

//------------ StubResolver --------------------------------------------------

/// A DNS stub resolver speaking to a single upstream server over UDP.
#[derive(Clone, Debug)]
pub struct StubResolver {
    /// The address of the upstream server.
    server: SocketAddr,

    /// How long to wait for a response.
    timeout: Duration,
}

impl StubResolver {
    /// Creates a resolver for the given upstream server with the default
    /// timeout.
    #[must_use]
    pub fn new(server: SocketAddr) -> Self {
        StubResolver {
            server,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a resolver with an explicit timeout.
    #[must_use]
    pub fn with_timeout(server: SocketAddr, timeout: Duration) -> Self {
        StubResolver { server, timeout }
    }

    /// Returns the address of the upstream server.
    pub fn server(&self) -> SocketAddr {
        self.server
    }

    /// Queries the upstream server for records of the given type.
    ///
    /// Composes a recursive query, sends it, and waits for a matching
    /// response for at most the configured timeout. Datagrams from a
    /// different source or with a different message id than the query are
    /// ignored and waiting continues.
    pub fn query(
        &self,
        qname: Name,
        qtype: Rtype,
    ) -> Result<Message, QueryError> {
        let query = Message::query(qname, qtype);
        let octets = query.compose()?;
        let sock = self.bind()?;
        sock.set_read_timeout(Some(self.timeout))?;
        sock.send_to(&octets, self.server)?;
        tracing::debug!(
            server = %self.server, id = query.header.id,
            "sent query of {} octets", octets.len()
        );
        let mut buf = [0u8; MAX_MESSAGE_SIZE];
        loop {
            let (len, from) = sock.recv_from(&mut buf)?;
            if from != self.server {
                tracing::debug!(%from, "ignoring datagram from foreign source");
                continue;
            }
            let response = Message::parse(&buf[..len])?;
            if response.header.id != query.header.id {
                tracing::debug!(
                    id = response.header.id,
                    "ignoring response with mismatched id"
                );
                continue;
            }
            tracing::debug!(
                answers = response.answers.len(),
                rcode = %response.header.rcode,
                "received response of {} octets", len
            );
            return Ok(response);
        }
    }

    /// Binds an unconnected socket matching the server's address family.
    fn bind(&self) -> Result<UdpSocket, io::Error> {
        let local: SocketAddr = match self.server {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        UdpSocket::bind(local)
    }
}

//============ Error Types ===================================================

//------------ QueryError ----------------------------------------------------

/// An error happened while performing a query.
#[derive(Debug)]
pub enum QueryError {
    /// The query could not be composed.
    Compose(ComposeError),

    /// The response could not be parsed.
    Parse(ParseError),

    /// The network operation failed.
    Io(io::Error),

    /// No response arrived within the configured timeout.
    Timeout,
}

//--- From

impl From<ComposeError> for QueryError {
    fn from(err: ComposeError) -> Self {
        QueryError::Compose(err)
    }
}

impl From<ParseError> for QueryError {
    fn from(err: ParseError) -> Self {
        QueryError::Parse(err)
    }
}

impl From<io::Error> for QueryError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
                QueryError::Timeout
            }
            _ => QueryError::Io(err),
        }
    }
}

//--- Display and Error

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QueryError::Compose(err) => {
                write!(f, "failed to compose query: {}", err)
            }
            QueryError::Parse(err) => {
                write!(f, "failed to parse response: {}", err)
            }
            QueryError::Io(err) => write!(f, "network error: {}", err),
            QueryError::Timeout => f.write_str("query timed out"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Compose(err) => Some(err),
            QueryError::Parse(err) => Some(err),
            QueryError::Io(err) => Some(err),
            QueryError::Timeout => None,
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timeout_from_io_error() {
        let err = io::Error::new(io::ErrorKind::WouldBlock, "would block");
        assert!(matches!(QueryError::from(err), QueryError::Timeout));
        let err = io::Error::new(io::ErrorKind::TimedOut, "timed out");
        assert!(matches!(QueryError::from(err), QueryError::Timeout));
        let err = io::Error::new(io::ErrorKind::Other, "other");
        assert!(matches!(QueryError::from(err), QueryError::Io(_)));
    }

    #[test]
    fn bind_matches_family() {
        let resolver =
            StubResolver::new(SocketAddr::from(([127, 0, 0, 1], 12853)));
        let sock = resolver.bind().unwrap();
        assert!(sock.local_addr().unwrap().is_ipv4());
    }
}
