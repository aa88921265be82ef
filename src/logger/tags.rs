/// Log tags identify the subsystem a message comes from.
///
/// Each tag maps to a `--debug-<key>` command-line flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Api,
    Pools,
    Telegram,
    Other(String),
}

impl LogTag {
    /// Key used by `--debug-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Api => "api".to_string(),
            LogTag::Pools => "pools".to_string(),
            LogTag::Telegram => "telegram".to_string(),
            LogTag::Other(name) => name.to_lowercase(),
        }
    }

    /// Uncolored label used in the log file
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Api => "API".to_string(),
            LogTag::Pools => "POOLS".to_string(),
            LogTag::Telegram => "TELEGRAM".to_string(),
            LogTag::Other(name) => name.to_uppercase(),
        }
    }
}
