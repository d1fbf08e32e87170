pub mod normalize;

pub use normalize::{Conversion, Normalizer, Options, ParseConversionError};
