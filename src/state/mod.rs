// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + change notifications
// ============================================================================

pub mod view;
pub mod auth_state;
pub mod data_state;
pub mod form_state;
pub mod app_state;

pub use view::*;
pub use auth_state::*;
pub use data_state::*;
pub use form_state::*;
pub use app_state::*;
