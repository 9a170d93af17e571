//! Logging infrastructure - structured exchange logging.
//!
//! Provides [`JsonlExchangeLogger`], an append-only JSONL writer that
//! implements the [`ExchangeLogger`](router_application::ExchangeLogger) port.

mod jsonl_exchange_logger;

pub use jsonl_exchange_logger::JsonlExchangeLogger;
