pub mod convert;


#[cfg(feature = "async")]
pub mod async_ext;
