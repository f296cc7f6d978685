/// Numeric conversion helpers.
///
/// Safe conversion from the parser's `f64` results to integers, used when
/// rendering a value back into words. Conversions only succeed when no
/// information is lost.
pub mod num;
