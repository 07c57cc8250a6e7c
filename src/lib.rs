// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the upload sequence.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with GitHub (repository and
//   release lookup, asset upload) and token handling.
// - `cli`: Defines the command-line argument surface.
//
// Keeping this separation makes the API logic testable without going
// through argument parsing.
pub mod api;
pub mod cli;
