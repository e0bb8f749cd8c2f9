// Adapters - Implementations of the ports

pub mod sphinx;

pub use sphinx::SphinxAdapter;
