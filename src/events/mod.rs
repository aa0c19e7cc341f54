pub mod nav;
pub mod pointer;
pub mod scroll;

pub use nav::{highlight_nav, label_nav, wire_nav_clicks};
pub use pointer::wire_cursor_follower;
pub use scroll::{wire_resize, wire_scroll_spy};
