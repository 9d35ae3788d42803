pub mod api_client;
pub mod citation_path;
pub mod response_shaping;
