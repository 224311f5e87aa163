pub mod linear_client;

pub use linear_client::LinearClient;
