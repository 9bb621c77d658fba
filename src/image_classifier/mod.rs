pub mod error;
#[cfg(test)]
pub mod impl_fake;
pub mod impl_pipeline;
pub mod interface;
pub mod labels;
pub mod model;
pub mod preprocess;
