pub mod vester;
