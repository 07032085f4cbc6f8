pub mod calculate;
pub mod form;
