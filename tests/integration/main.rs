//! Integration tests driving the full router over in-process HTTP.

mod helpers;

mod note_test;
mod session_test;
mod user_test;
