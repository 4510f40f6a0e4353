//! # Integration Flows
//!
//! Cross-crate scenarios driven through the public registry APIs.

pub mod runtime_flows;
pub mod signature_flows;
pub mod token_flows;
