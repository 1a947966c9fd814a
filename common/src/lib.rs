pub mod config;
pub mod crypto;
pub mod logging;
pub mod sbt;
pub mod serializer;
