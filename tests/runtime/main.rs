//! Integration tests for Layer 3: Runtime
//!
//! Sessions over real save directories and the full two-thread pipeline.

mod end_to_end;
mod saves;
mod support;
