/// Entry point of the parser.
///
/// Contains the top-level expression production and the shared result type
/// threaded through every parsing function.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative productions, whose call nesting
/// encodes operator precedence.
pub mod binary;

/// Factor parsing.
///
/// Handles the atomic level of the grammar: literals and parenthesized
/// groups.
pub mod factor;
