pub mod fs;
pub mod launcher;
