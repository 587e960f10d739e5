pub mod login;
pub mod ventas;
