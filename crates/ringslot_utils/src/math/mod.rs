pub mod angle;
pub mod num;
