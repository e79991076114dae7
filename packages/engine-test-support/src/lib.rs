//! Engine test support utilities
//!
//! Shared by the integration test binaries of the workspace: one logging
//! initializer and one proptest configuration.

pub mod logging;
pub mod proptest_prelude;
