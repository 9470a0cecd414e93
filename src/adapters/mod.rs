//! Port implementations.
//!
//! `live` talks to the real system clock, disk, and network. `fixed` and
//! `memory` are deterministic stand-ins used by tests.

pub mod fixed;
pub mod live;
pub mod memory;
