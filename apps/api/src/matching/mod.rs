//! Resume-to-job matching: keyword alignment, skills coverage, experience
//! classification, and a weighted composite with tier classification.

pub mod handlers;
pub mod keywords;
pub mod profile;
pub mod report;
pub mod scoring;
