mod api_client;
mod error;
