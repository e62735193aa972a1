pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
}
pub mod catalog;
pub mod checkout;
pub mod customers;
pub mod gateway;
pub mod hold;
pub mod ledger;
pub mod utils {
    pub mod date;
    pub mod logging;
}
