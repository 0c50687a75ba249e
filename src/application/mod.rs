pub mod orchestrate;
pub mod translate;
