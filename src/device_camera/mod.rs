#[cfg(any(test, feature = "camera"))]
pub mod frame;
#[cfg(test)]
pub mod impl_fake;
#[cfg(feature = "camera")]
pub mod impl_nokhwa;
#[cfg(any(test, not(feature = "camera")))]
pub mod impl_unavailable;
pub mod interface;
