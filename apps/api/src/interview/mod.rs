//! Interview-prep domain: conversational-quality scoring against AI and
//! human interviewer benchmarks, narrative-depth prediction of AI skill
//! ratings, and per-skill question banks with sequencing and follow-ups.

pub mod conversational;
pub mod depth;
pub mod handlers;
pub mod questions;
pub mod types;
