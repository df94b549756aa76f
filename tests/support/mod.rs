// tests/support/mod.rs
// Shared by several integration test binaries; each binary uses a subset, so
// dead_code / unused_imports are allowed at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
