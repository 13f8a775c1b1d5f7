use std::fmt::{self, Display};
use std::sync::LazyLock;

use regex::Regex;

const MAX_NAME_LENGTH: usize = 214;
static URL_UNSAFE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\-._~!*'()]").unwrap());

const RESERVED_NAMES: [&str; 2] = ["node_modules", "favicon.ico"];

/// Modules that ship with Node.js; a package named after one of them could never be required
const NODE_CORE_MODULES: [&str; 40] = [
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "zlib",
];

/// A single package naming rule that a proposed project name breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameProblem {
    Empty,
    TooLong,
    StartsWithPeriod,
    StartsWithUnderscore,
    SurroundingWhitespace,
    NotLowercase,
    NotUrlSafe,
    Reserved(String),
    CoreModule(String),
}

impl Display for NameProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use NameProblem::*;
        match self {
            Empty => write!(f, "name length must be greater than zero"),
            TooLong => write!(
                f,
                "name can no longer contain more than {MAX_NAME_LENGTH} characters"
            ),
            StartsWithPeriod => write!(f, "name cannot start with a period"),
            StartsWithUnderscore => write!(f, "name cannot start with an underscore"),
            SurroundingWhitespace => {
                write!(f, "name cannot contain leading or trailing spaces")
            }
            NotLowercase => write!(f, "name can no longer contain capital letters"),
            NotUrlSafe => write!(f, "name can only contain URL-friendly characters"),
            Reserved(name) => write!(f, "{name} is a reserved name"),
            CoreModule(name) => write!(f, "{name} is a core module name"),
        }
    }
}

/// Applies the npm package naming rules to `name`, collecting every rule it breaks
pub fn validate_package_name(name: &str) -> Result<(), Vec<NameProblem>> {
    if name.is_empty() {
        return Err(vec![NameProblem::Empty]);
    }

    let mut problems = Vec::new();
    if name.starts_with('.') {
        problems.push(NameProblem::StartsWithPeriod);
    }
    if name.starts_with('_') {
        problems.push(NameProblem::StartsWithUnderscore);
    }
    if name.trim() != name {
        problems.push(NameProblem::SurroundingWhitespace);
    }

    let lowercase = name.to_lowercase();
    if let Some(reserved) = RESERVED_NAMES.iter().find(|reserved| **reserved == lowercase) {
        problems.push(NameProblem::Reserved(reserved.to_string()));
    }
    if let Some(core) = NODE_CORE_MODULES.iter().find(|core| **core == lowercase) {
        problems.push(NameProblem::CoreModule(core.to_string()));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        problems.push(NameProblem::TooLong);
    }
    if lowercase != name {
        problems.push(NameProblem::NotLowercase);
    }
    // scoped names (`@scope/name`) fall in here too since the project
    // name doubles as a directory name
    if URL_UNSAFE_PATTERN.is_match(name) {
        problems.push(NameProblem::NotUrlSafe);
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
