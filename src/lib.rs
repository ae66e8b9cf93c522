// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the subcommands.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the Apollo backend
//   (search, create, upload, enrich) and the credential loader.
// - `cli`: The clap argument grammar for the four subcommands.
// - `commands`: One handler per subcommand; owns all console output
//   and delegates requests to `api`.
// - `output`: Pretty-printer for JSON responses of unknown shape.
//
// Keeping this separation means the transport logic in `api` can be
// tested against a mock server without touching the console.
pub mod api;
pub mod cli;
pub mod commands;
pub mod output;
