pub mod google_web;
pub mod http;
pub mod libre;
pub mod model_client;
