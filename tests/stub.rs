//! Exercises the stub resolver against a local mock server.

use bytes::Bytes;
use std::net::{SocketAddr, UdpSocket};
use std::str::FromStr;
use std::thread;
use std::time::Duration;
use stubdns::base::iana::{Class, Rcode, Rtype};
use stubdns::base::name::Name;
use stubdns::base::{Message, Record};
use stubdns::resolv::{QueryError, StubResolver};

/// Runs a one-shot server that answers a single query with `make_response`.
///
/// Returns the address the server listens on. The server thread exits after
/// answering one datagram.
fn spawn_server(
    make_response: impl FnOnce(Message) -> Message + Send + 'static,
) -> SocketAddr {
    let sock = UdpSocket::bind("127.0.0.1:0").unwrap();
    let addr = sock.local_addr().unwrap();
    thread::spawn(move || {
        let mut buf = [0u8; 512];
        let (len, from) = sock.recv_from(&mut buf).unwrap();
        let query = Message::parse(&buf[..len]).unwrap();
        let response = make_response(query);
        sock.send_to(&response.compose().unwrap(), from).unwrap();
    });
    addr
}

#[test]
fn query_roundtrip() {
    let addr = spawn_server(|query| {
        let mut response = Message::new();
        response.header.id = query.header.id;
        response.header.qr = true;
        response.header.rd = query.header.rd;
        response.header.ra = true;
        let question = query.questions[0].clone();
        response.answers.push(Record::new(
            question.qname.clone(),
            question.qtype,
            question.qclass,
            300,
            Bytes::from_static(&[192, 0, 2, 1]),
        ));
        response.questions.push(question);
        response
    });

    let resolver = StubResolver::new(addr);
    let name = Name::from_str("test.example").unwrap();
    let response = resolver.query(name.clone(), Rtype::A).unwrap();

    assert!(response.header.qr);
    assert_eq!(response.header.rcode, Rcode::NOERROR);
    assert_eq!(response.answers.len(), 1);
    let answer = &response.answers[0];
    assert_eq!(answer.name, name);
    assert_eq!(answer.rtype, Rtype::A);
    assert_eq!(answer.class, Class::IN);
    assert_eq!(answer.ttl, 300);
    assert_eq!(answer.data.as_ref(), &[192, 0, 2, 1]);
}

#[test]
fn mismatched_id_is_ignored_until_timeout() {
    let addr = spawn_server(|query| {
        let mut response = Message::new();
        response.header.id = query.header.id.wrapping_add(1);
        response.header.qr = true;
        response
    });

    let resolver =
        StubResolver::with_timeout(addr, Duration::from_millis(200));
    let name = Name::from_str("test.example").unwrap();
    let err = resolver.query(name, Rtype::A).unwrap_err();
    assert!(matches!(err, QueryError::Timeout));
}

#[test]
fn no_server_times_out() {
    // Nothing listens on this address; the port is bound and dropped so it
    // is very likely free.
    let addr = {
        let sock = UdpSocket::bind("127.0.0.1:0").unwrap();
        sock.local_addr().unwrap()
    };
    let resolver =
        StubResolver::with_timeout(addr, Duration::from_millis(200));
    let name = Name::from_str("test.example").unwrap();
    let err = resolver.query(name, Rtype::A).unwrap_err();
    assert!(matches!(err, QueryError::Timeout));
}

#[test]
fn malformed_response_is_an_error() {
    let sock = UdpSocket::bind("127.0.0.1:0").unwrap();
    let addr = sock.local_addr().unwrap();
    thread::spawn(move || {
        let mut buf = [0u8; 512];
        let (_, from) = sock.recv_from(&mut buf).unwrap();
        // Shorter than a header.
        sock.send_to(&[0u8; 4], from).unwrap();
    });

    let resolver =
        StubResolver::with_timeout(addr, Duration::from_millis(500));
    let name = Name::from_str("test.example").unwrap();
    let err = resolver.query(name, Rtype::A).unwrap_err();
    assert!(matches!(err, QueryError::Parse(_)));
}
