pub mod app;
pub mod event;
pub mod input;
pub mod mode;
pub mod render_state;

pub use app::{App, LinkTarget};
pub use event::AppEvent;
pub use input::InputBuffer;
pub use mode::AppMode;
pub use render_state::{RenderRow, RenderState, RenderTag};
