pub mod usuario;
pub mod venta;

pub use usuario::Usuario;
pub use venta::Venta;
