pub mod analyze;
pub mod model;

pub use analyze::{analyze_entries, block_edges, build_blocks, functions, Analysis, Block, Edge, EdgeKind, EdgeOut, FunctionOut};
pub use model::{load_raw_bin, Image, Segment};
