mod profile_page;
pub use profile_page::*;

#[cfg(feature = "ssr")]
mod user_list_page;
#[cfg(feature = "ssr")]
pub use user_list_page::*;
