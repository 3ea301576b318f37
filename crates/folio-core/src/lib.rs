pub mod blob;
pub mod carousel;
pub mod constants;
pub mod spline;

pub use blob::*;
pub use carousel::*;
pub use constants::*;
pub use spline::*;
