// Composition root for the fake.
//
// Responsibilities:
// - Read settings from the environment.
// - Construct the one dataset store and wire it into the use case handlers.
// - Expose the router the binary serves.

pub mod config;
pub mod http;
pub mod state;
