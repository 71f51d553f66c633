pub mod media;
pub mod payload;
