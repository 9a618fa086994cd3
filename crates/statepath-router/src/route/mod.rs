/// Route module for nested route trees
///
/// Contains the pure components that turn a declared tree into matcher input:
/// - `definition`: the tree nodes and their builders
/// - `description`: flattening into root-to-leaf chains
/// - `pattern` / `parser`: path fragments to typed, ranked segments

pub mod definition;
pub mod description;
pub mod parser;
pub mod pattern;

// Re-export commonly used types
pub use definition::{redirect, route, RouteDefinition};
pub use description::{flatten, Description, DescriptionPart, Handler};
pub use parser::{parse_chain, parse_fragment, OwnedSegment, ParsedPattern, Specificity};
pub use pattern::{classify_segment, PatternSegment};
