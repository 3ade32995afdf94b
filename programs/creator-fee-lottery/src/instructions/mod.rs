pub mod admin;
pub mod commit_draw;
pub mod record_fees;
pub mod run_draw;
pub mod settle_reward;
pub mod sync_holders;
pub mod tick_weather;

pub use admin::*;
pub use commit_draw::*;
pub use record_fees::*;
pub use run_draw::*;
pub use settle_reward::*;
pub use sync_holders::*;
pub use tick_weather::*;
