mod p4;

pub use p4::P4CliProvider;
