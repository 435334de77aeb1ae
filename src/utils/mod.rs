pub mod charset;
pub mod id;
pub mod seed;
