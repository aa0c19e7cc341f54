pub mod constants;
pub mod cursor;
pub mod particles;
pub mod projects;
pub mod scroll_spy;
pub mod section;
pub mod stage;

pub use cursor::*;
pub use particles::*;
pub use projects::*;
pub use scroll_spy::*;
pub use section::*;
pub use stage::*;
