//! Resolver module: Where the reference digest comes from
//!
//! Two sources, checked in order:
//! 1. An explicit hex hash given by the caller
//! 2. A sidecar text file inside the target folder
//!
//! An explicit hash always wins. Under [`SourcePolicy::Exclusive`] giving
//! both is rejected instead.

mod resolve;
mod source;

pub use resolve::DigestResolver;
pub use source::{SourcePolicy, DEFAULT_SIDECAR_FILE_NAME};

#[cfg(test)]
mod tests;
