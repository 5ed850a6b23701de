pub mod dom_security_schema;

pub use dom_security_schema::*;
