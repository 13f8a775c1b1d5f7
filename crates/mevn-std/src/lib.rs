mod error;
mod fs;
mod style;
pub mod symbols;
pub mod url;

pub mod emoji;
pub mod print;
pub use error::MevnStdError;
pub use fs::Fs;
pub use style::Style;
pub use style::is_no_color_set;
pub use symbols::{failure_cross, failure_message, success_checkmark, success_message};
pub use url::hyperlink;
pub use url::sanitize_url;
