pub mod setup;
pub mod versions;
