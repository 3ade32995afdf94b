pub mod holders;
pub mod lottery;
pub mod rewards;

pub use holders::*;
pub use lottery::*;
pub use rewards::*;
