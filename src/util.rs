/// Wrapping integer helpers.
///
/// Repeated-squaring exponentiation, Stein's binary GCD, width-bounded
/// rotation and byte reversal, and host byte-order detection. Everything here
/// works on `u128`/`u64` bit patterns so that every width can share it.
pub mod num;
/// ASCII character names and the ASCII table printer.
pub mod ascii;
/// Input normalisation applied to raw fields before lexing.
pub mod text;
