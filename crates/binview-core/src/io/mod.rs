pub mod banded;
pub mod snapshot;
pub mod stream;
