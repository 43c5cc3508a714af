pub mod config;
pub mod interactive;
pub mod password_gen;
pub mod testpass;
