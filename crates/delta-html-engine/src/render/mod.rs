//! # Rendering
//!
//! A single pass over the operations, writing HTML as it goes.
//!
//! ## Per operation
//!
//! 1. **Resolve** the operation's formatters and split them into inline and
//!    block formats.
//! 2. **Accumulate inline**: the [`TagStack`] closes and opens only the tags
//!    that differ from the previous operation, then the text is appended to
//!    the current block's buffer.
//! 3. **Flush the block** at each `"\n"`: open inline tags close, and the
//!    [`BlockAssembler`] wraps the buffer in the element merged from the
//!    terminating operation's block formats.
//!
//! ## Modules
//!
//! - **`driver`**: `render_operations` and the `Renderer` state machine
//! - **`stack`**: `TagStack`, the inline open/close diff
//! - **`block`**: `BlockAssembler` and `BlockWrapper` merging
//! - **`markup`**: tag and attribute writers

pub mod block;
pub mod driver;
pub mod markup;
pub mod stack;

pub use block::{BlockAssembler, BlockWrapper};
pub use driver::{Renderer, Step, render_operations, steps};
pub use stack::TagStack;
