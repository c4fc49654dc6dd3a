pub mod api_structs;

mod backend;
mod client;
mod http_trait;
mod reqwest_impl;

pub use backend::MirrorBackend;
pub use client::MirrorClient;
pub use http_trait::HttpClient;
pub use reqwest_impl::ReqwestClient;
