//! Value Objects
//!
//! Immutable types with no identity of their own.

mod experience;
mod node_id;
mod salary;
mod selection_state;

pub use experience::Experience;
pub use node_id::NodeId;
pub use salary::{Salary, MAX_SALARY};
pub use selection_state::{Checkbox, SelectionState};
