//! Application layer - Use-case handlers wiring the domain to the ports.

pub mod handlers;
