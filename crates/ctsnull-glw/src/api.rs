use std::fmt;
use std::str::FromStr;

use crate::error::GlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Es,
    Core,
}

/// API versions a function table can be initialised for. GL versions are
/// core profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApiType {
    Es20,
    Es30,
    Es31,
    Es32,
    Gl30,
    Gl31,
    Gl32,
    Gl33,
    Gl40,
    Gl41,
    Gl42,
    Gl43,
    Gl44,
}

impl ApiType {
    pub const ALL: [ApiType; 13] = [
        ApiType::Es20,
        ApiType::Es30,
        ApiType::Es31,
        ApiType::Es32,
        ApiType::Gl30,
        ApiType::Gl31,
        ApiType::Gl32,
        ApiType::Gl33,
        ApiType::Gl40,
        ApiType::Gl41,
        ApiType::Gl42,
        ApiType::Gl43,
        ApiType::Gl44,
    ];

    pub fn profile(self) -> Profile {
        match self {
            ApiType::Es20 | ApiType::Es30 | ApiType::Es31 | ApiType::Es32 => Profile::Es,
            _ => Profile::Core,
        }
    }

    /// (major, minor)
    pub fn version(self) -> (u32, u32) {
        match self {
            ApiType::Es20 => (2, 0),
            ApiType::Es30 => (3, 0),
            ApiType::Es31 => (3, 1),
            ApiType::Es32 => (3, 2),
            ApiType::Gl30 => (3, 0),
            ApiType::Gl31 => (3, 1),
            ApiType::Gl32 => (3, 2),
            ApiType::Gl33 => (3, 3),
            ApiType::Gl40 => (4, 0),
            ApiType::Gl41 => (4, 1),
            ApiType::Gl42 => (4, 2),
            ApiType::Gl43 => (4, 3),
            ApiType::Gl44 => (4, 4),
        }
    }

    pub fn new(profile: Profile, major: u32, minor: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|api| api.profile() == profile && api.version() == (major, minor))
    }

    /// This version and every earlier version of the same profile, oldest
    /// first.
    pub fn lineage(self) -> impl Iterator<Item = ApiType> {
        Self::ALL
            .into_iter()
            .filter(move |api| api.profile() == self.profile() && *api <= self)
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.profile() {
            Profile::Es => "es",
            Profile::Core => "gl",
        };
        let (major, minor) = self.version();
        write!(f, "{}{}.{}", prefix, major, minor)
    }
}

impl FromStr for ApiType {
    type Err = GlError;

    /// Accepts `es3.1`, `gl4.3`, `gles3.1` and `gl43`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || GlError::UnknownApi(s.to_string());
        let lower = s.trim().to_ascii_lowercase();

        let (profile, version) = if let Some(rest) = lower.strip_prefix("gles") {
            (Profile::Es, rest)
        } else if let Some(rest) = lower.strip_prefix("es") {
            (Profile::Es, rest)
        } else if let Some(rest) = lower.strip_prefix("gl") {
            (Profile::Core, rest)
        } else {
            return Err(unknown());
        };

        let digits: String = version.chars().filter(|c| *c != '.').collect();
        let mut chars = digits.chars();
        let (major, minor) = match (chars.next(), chars.next(), chars.next()) {
            (Some(major), Some(minor), None) => (major.to_digit(10), minor.to_digit(10)),
            _ => return Err(unknown()),
        };

        match (major, minor) {
            (Some(major), Some(minor)) => Self::new(profile, major, minor).ok_or_else(unknown),
            _ => Err(unknown()),
        }
    }
}
