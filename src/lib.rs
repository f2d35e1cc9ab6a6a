// Lexivar: lexical variation and cross-source agreement analysis.
//
// This is the library root. The pipeline is: load a table (table), select
// an id column and source columns (table::selection), then run the two
// independent engines (variation, similarity) and hand their results to
// the output layer.

pub mod config;
pub mod normalize;
pub mod output;
pub mod similarity;
pub mod table;
pub mod variation;
