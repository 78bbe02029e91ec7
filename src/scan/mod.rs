//! Scanner: the code/non-code mask everything else is built on.

mod mask;

pub use mask::{Mask, ScanResult, Span, scan, scan_chars};
