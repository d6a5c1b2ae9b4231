mod vulavula_client;

pub use vulavula_client::VulavulaClient;
