//! Look up Turkish words in the TDK (Türk Dil Kurumu) dictionary.
//!
//! A [`WordQuery`] fetches definitions, example sentences, compound nouns,
//! idioms, spelling suggestions and pronunciation links for one word, caching
//! each response for the lifetime of the query.

pub mod audio;
pub mod cli;
pub mod client;
pub mod config;
pub mod dictionary;
pub mod error;

pub use client::{HttpTransport, Transport};
pub use config::Config;
pub use dictionary::entry::{format, NormalizedDefinition, NormalizedEntry};
pub use dictionary::schema::RawEntry;
pub use dictionary::WordQuery;
pub use error::{Result, TdkError};
