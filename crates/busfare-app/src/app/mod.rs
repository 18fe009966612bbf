//! Application use cases

pub mod quote_service;

pub use quote_service::{
    BatchEntry, BatchOutcome, BatchQuotes, HireQuote, QuoteService, StageQuote,
};
