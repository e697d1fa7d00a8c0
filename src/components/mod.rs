pub mod error_page;
pub mod user_list;

#[allow(unused_imports)]
pub use error_page::*;
#[allow(unused_imports)]
pub use user_list::*;
