//! Accent resolution for catalog records.
//!
//! Each record carries one of four closed accent variants; the terminal
//! attributes for a variant are resolved once through a static lookup
//! instead of being recomposed per render.

use serde::{Deserialize, Serialize};

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const TREE: &str = "\x1b[90m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Cognition,
    Emergence,
    Memory,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub label: &'static str,
    /// Foreground sequence for the category tab and matched tags.
    pub fg: &'static str,
    /// De-emphasis sequence for records outside the active match set.
    pub faint: &'static str,
}

const COGNITION: StyleDescriptor = StyleDescriptor {
    label: "cognition",
    fg: "\x1b[36m",
    faint: "\x1b[2;36m",
};

const EMERGENCE: StyleDescriptor = StyleDescriptor {
    label: "emergence",
    fg: "\x1b[35m",
    faint: "\x1b[2;35m",
};

const MEMORY: StyleDescriptor = StyleDescriptor {
    label: "memory",
    fg: "\x1b[33m",
    faint: "\x1b[2;33m",
};

const DATA: StyleDescriptor = StyleDescriptor {
    label: "data",
    fg: "\x1b[34m",
    faint: "\x1b[2;34m",
};

impl Accent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cognition => "cognition",
            Self::Emergence => "emergence",
            Self::Memory => "memory",
            Self::Data => "data",
        }
    }

    #[must_use]
    pub const fn style(self) -> &'static StyleDescriptor {
        match self {
            Self::Cognition => &COGNITION,
            Self::Emergence => &EMERGENCE,
            Self::Memory => &MEMORY,
            Self::Data => &DATA,
        }
    }
}
