// src/lib.rs
pub use engine::LinkEngine;
pub use error::LinkError;
pub use extractor::{
    ExtractFn, ExtractorRegistry, ExtractorRegistryBuilder, QueryExtractor, RegexExtractor,
    default_extractors,
};
pub use loader::parse_policy_document;
pub use service_principals::service_principal_target;
pub use types::*;

mod destinations;
mod engine;
mod error;
mod extractor;
mod loader;
pub mod metrics;
mod principals;
mod service_principals;
mod types;
