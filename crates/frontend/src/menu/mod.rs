mod state;
mod view;

pub use state::MenuState;
pub use view::MenuSection;
