//! A small command line DNS client.
//!
//! Queries a configurable upstream server for the IPv4 and IPv6 addresses
//! of a domain name and prints them.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::process::ExitCode;
use stubdns::base::iana::Rtype;
use stubdns::base::name::Name;
use stubdns::base::Record;
use stubdns::resolv::{QueryError, StubResolver};
use tracing_subscriber::EnvFilter;

//------------ Args ----------------------------------------------------------

/// Look up the addresses of a domain name.
#[derive(Clone, Debug, Parser)]
#[command(version)]
struct Args {
    /// The IP address of the DNS server to query.
    #[arg(short, long)]
    server: IpAddr,

    /// The port of the DNS server.
    #[arg(short, long, default_value_t = 53)]
    port: u16,

    /// The domain name to look up.
    #[arg(short, long)]
    domain: Name,
}

//------------ main ----------------------------------------------------------

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), QueryError> {
    let server = SocketAddr::new(args.server, args.port);
    let resolver = StubResolver::new(server);

    println!("Domain: {}", args.domain);
    println!("Dns-Server: {}", server);

    let response = resolver.query(args.domain.clone(), Rtype::A)?;
    println!("IPv4-Addresses:");
    print_addresses(&response.answers);

    let response = resolver.query(args.domain.clone(), Rtype::AAAA)?;
    println!("IPv6-Addresses:");
    print_addresses(&response.answers);

    Ok(())
}

/// Prints the address records among the given records, one per line.
///
/// Records whose data does not have the length of an IPv4 or IPv6 address
/// are skipped. This covers CNAME records a server may interleave with the
/// addresses in its answer section.
fn print_addresses(records: &[Record]) {
    for record in records {
        match record.data.as_ref() {
            &[a, b, c, d] if record.rtype == Rtype::A => {
                println!("    - {}", Ipv4Addr::new(a, b, c, d));
            }
            data if record.rtype == Rtype::AAAA && data.len() == 16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(data);
                println!("    - {}", Ipv6Addr::from(octets));
            }
            _ => {}
        }
    }
}
