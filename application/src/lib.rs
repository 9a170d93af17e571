//! Application layer for answer-router
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BatchParams;
pub use ports::{
    answer_store::{AnswerStore, StoreError},
    exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger},
    llm_gateway::{ChatGateway, GatewayError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::classify_question::ClassifyQuestionUseCase;
pub use use_cases::evaluate::{EvaluateError, EvaluateUseCase};
pub use use_cases::generate_answers::{
    GenerateAnswersError, GenerateAnswersOutput, GenerateAnswersUseCase, ValidationError,
    validate_answers,
};
pub use use_cases::run_strategy::RunStrategyUseCase;
pub use use_cases::self_consistency::{SelfConsistencyResult, SelfConsistencyUseCase};
pub use use_cases::solve_question::SolveQuestionUseCase;
