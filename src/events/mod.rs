pub mod pointer;
pub mod window;

pub use pointer::{wire_confirm, wire_decoy};
pub use window::{dismiss_loader, hide_loader_now, sync_layout, wire_resize, wire_teardown};
