pub mod observability;
pub mod vulavula;
