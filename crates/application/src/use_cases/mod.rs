pub mod evaluate_domain;

pub use evaluate_domain::EvaluateDomainUseCase;
