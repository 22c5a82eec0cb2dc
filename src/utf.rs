pub(crate) mod utf16sequence;
pub(crate) mod utf8sequence;

/// A partially accumulated multi-unit encoding of one code point.
///
/// `build` classifies a leading unit and rejects units that cannot start a
/// sequence; `add_point` feeds follow-up units until `is_complete`.
pub(crate) trait Utf: Sized {
    type Point;
    fn build(point: Self::Point) -> Option<Self>;
    fn add_point(&mut self, point: Self::Point) -> bool;
    fn is_complete(&self) -> bool;
    fn get_codepoint(&self) -> u32;
    fn is_valid(&self) -> bool;
}
