// Library root
// -----------
// This crate exposes a small library surface for the upload helper. The
// binary (`main.rs`) uses it to implement the one-shot CSV upload.
//
// Module responsibilities:
// - `api`: Encapsulates the HTTP interaction with the leads backend (one
//   multipart upload) and reports the response back to the caller.
//
// Keeping the client in the library keeps the binary trivial and lets the
// integration tests exercise the same code path the helper runs.
pub mod api;
