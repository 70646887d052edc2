// Library crate: the toolkit-independent whiteboard core, exposed for
// integration tests and the scripted agent interface.
// Rendering (app, canvas, ui) remains in the binary crate.

pub mod chat_client;
pub mod command;
pub mod fixtures;
pub mod harness;
pub mod state;
