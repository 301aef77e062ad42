pub mod api;
pub mod api_client;
pub mod token;
pub mod token_store;

#[cfg(test)]
pub mod mock_api;

pub use api::HospitalApi;
pub use api_client::ApiClient;
pub use token::{decode_current_identity, decode_identity};
pub use token_store::{LocalTokenStore, MemoryTokenStore, TokenStore};
