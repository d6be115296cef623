mod workspace;

pub use workspace::{sortify, TestWorkspace};
