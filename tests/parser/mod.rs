//! Public parsing surface: unit selectors and the scanner.
