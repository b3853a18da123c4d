pub mod paysera;
pub use self::paysera::Paysera;
