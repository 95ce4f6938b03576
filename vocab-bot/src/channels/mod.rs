pub mod telegram;
pub mod util;
