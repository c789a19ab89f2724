//! Tree Menu Widget
//!
//! Interactive checkbox tree for the industry and area selections.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::{key_to_action, run_interactive};
pub use menu::{MenuExit, TreeAction, TreeMenu};
