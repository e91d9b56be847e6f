//! Fax Runtime Library
//!
//! Provides runtime support for code generated from Fax programs:
//! - Checked indirection (`Ptr`)
//! - Bounds-checked arrays (`Array`, `array!`)
//! - Multi-argument output (`println!`, `print_item`)
//! - C ABI checks for natively compiled code
//!
//! Contract violations surface as [`RuntimeError`] from the fallible
//! methods, or as a fatal signal from operators (`*ptr`, `arr[i]`) according
//! to the installed [`RuntimeConfig`].

pub mod array;
pub mod config;
pub mod error;
pub mod ffi;
pub mod output;
pub mod ptr;
pub mod violation;

mod edge_cases;

pub use array::{Array, ArrayIndex};
pub use config::{config, init, RuntimeConfig, ViolationPolicy};
pub use error::{ConfigError, RuntimeError, RuntimeResult, ViolationKind};
pub use output::print_item;
pub use ptr::Ptr;
