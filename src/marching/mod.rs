pub mod sdf;
pub mod marcher;
