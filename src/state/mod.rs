// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + notifications
// ============================================================================

pub mod reactivity;
pub mod collection_state;
pub mod identity_state;
pub mod preferences_state;

pub use reactivity::*;
pub use collection_state::*;
pub use identity_state::*;
pub use preferences_state::*;
