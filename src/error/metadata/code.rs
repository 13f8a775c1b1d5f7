use std::collections::HashMap;
use std::fmt::{self, Display};

use strum_macros::{EnumIter, EnumString};

/// `MevnErrorCode` contains the error codes associated with specific errors.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum MevnErrorCode {
    E001,
    E002,
    E003,
    E004,
    E005,
    E006,
    E007,
    E008,
    E009,
}

impl Display for MevnErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}", &self)
    }
}

impl MevnErrorCode {
    // builds a Map of every possible code and its explanation, so we can
    // access from the `explain` function
    fn explanations() -> HashMap<MevnErrorCode, &'static str> {
        let contents = vec![
            (MevnErrorCode::E001, include_str!("./codes/E001.md")),
            (MevnErrorCode::E002, include_str!("./codes/E002.md")),
            (MevnErrorCode::E003, include_str!("./codes/E003.md")),
            (MevnErrorCode::E004, include_str!("./codes/E004.md")),
            (MevnErrorCode::E005, include_str!("./codes/E005.md")),
            (MevnErrorCode::E006, include_str!("./codes/E006.md")),
            (MevnErrorCode::E007, include_str!("./codes/E007.md")),
            (MevnErrorCode::E008, include_str!("./codes/E008.md")),
            (MevnErrorCode::E009, include_str!("./codes/E009.md")),
        ];
        contents.into_iter().collect()
    }

    /// For a given error code, returns a markdown string with a given error's
    /// explanation. Explanations are in ./codes
    pub fn explain(&self) -> String {
        let all_explanations = MevnErrorCode::explanations();
        match all_explanations.get(self) {
            Some(explanation) => format!("**{}**\n\n{}\n\n", &self, explanation.trim_end()),
            None => "Explanation not available".to_string(),
        }
    }
}
