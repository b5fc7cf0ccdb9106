pub mod augment;
pub mod normalize;
