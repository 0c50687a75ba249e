//! AgriBot backend: answers farming questions in English, Hindi and Telugu by
//! pivoting every non-English query through English before it reaches the
//! model.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod state;
