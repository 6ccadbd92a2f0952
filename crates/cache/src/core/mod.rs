pub mod domain;
pub mod use_case;
pub mod usecases;

pub use use_case::{UseCase, UseCaseValidatable};
