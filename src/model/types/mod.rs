mod error;
pub use error::*;

mod fetch_policy;
pub use fetch_policy::*;

mod user;
pub use user::*;

#[cfg(feature = "ssr")]
mod app_state;
#[cfg(feature = "ssr")]
pub use app_state::*;
