//! Integration test harness.
//!
//! All integration tests live in one binary; shared setup is in `helpers`.

mod compositor_test;
mod gradient_test;
mod helpers;
