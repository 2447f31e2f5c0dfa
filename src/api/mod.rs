pub mod history_client;

pub use history_client::HistoryClient;
