//! Feedback Validation
//!
//! Pure field rules for the feedback form. Nothing here touches the page or
//! the network: every function takes a value and answers whether it is
//! acceptable. Used by the native controller and the WASM binding alike.

pub mod attachment;
pub mod email;
pub mod escape;
pub mod phone;
pub mod string;

// Re-export all validators
pub use attachment::*;
pub use email::*;
pub use escape::*;
pub use phone::*;
pub use string::*;
