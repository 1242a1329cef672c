//! Output encodings of a finished canvas.

pub mod png;
