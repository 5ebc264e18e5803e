pub mod delete;
pub mod error;
pub mod login;
pub mod pages;
pub mod profile;
pub mod register;

pub use error::AppError;
