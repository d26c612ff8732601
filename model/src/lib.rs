pub mod credential;
pub mod entity;
pub mod image;
