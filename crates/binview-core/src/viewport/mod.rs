pub mod pager;
pub mod update;

pub use pager::{JumpDirection, PagerOptions, ViewportPager};
pub use update::{apply_shift, DisplaySink, FrameMirror, FrameUpdate, ScrollDirection};
