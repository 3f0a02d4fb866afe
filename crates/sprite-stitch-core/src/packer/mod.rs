pub mod growing;

pub use growing::{Block, GrowingBinPacker};
