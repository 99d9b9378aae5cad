//! Apple II system emulator core.
//!
//! The processor engine and memory-mapped I/O surface of an Apple II
//! class machine: a 6502 over a 64KB map with soft switches for the
//! keyboard latch and display modes, a write-protected firmware region,
//! and program loading. Runs unmodified original firmware images.
//!
//! Rendering, host input translation, disk images and the frame-pacing
//! loop are host concerns; they drive this crate through [`Apple2`]'s
//! public surface.

mod apple2;
pub mod config;
pub mod loader;
mod memory;
pub mod snapshot;

pub use apple2::Apple2;
pub use config::Apple2Config;
pub use memory::Apple2Memory;
pub use snapshot::Snapshot;
