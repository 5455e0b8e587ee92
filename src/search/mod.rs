pub mod filter;
pub mod normalize;

pub use filter::filter_products;
pub use normalize::normalize;
