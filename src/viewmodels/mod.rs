pub mod session_viewmodel;
pub mod data_viewmodel;
pub mod actions_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use data_viewmodel::{DataViewModel, Fetch};
pub use actions_viewmodel::ActionsViewModel;
