pub mod error;
#[cfg(feature = "collections")]
pub mod fmt;
#[cfg(feature = "collections")]
pub mod result;
pub mod testing;
