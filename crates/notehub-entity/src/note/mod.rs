//! Note domain entities.

pub mod model;
pub mod token;

pub use model::{Note, NoteDraft};
pub use token::generate_note_token;
