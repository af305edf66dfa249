//! Types for DNS parameters registered with IANA.
//!
//! Each type wraps the raw integer of the parameter and knows the
//! well-defined values by name. Values outside the registered set keep
//! their raw integer so that unknown parameters pass through the codec
//! unharmed.

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;
