use serde::{Deserialize, Serialize};

/// Terminal emulation negotiated by the BBS host (door32.sys line 9).
///
/// The raw code in [`super::SessionInfo`] is kept as-is; this is only an
/// interpretation of it. Codes the door does not recognize are preserved in
/// [`Emulation::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emulation {
    Ascii,
    Ansi,
    Avatar,
    Rip,
    MaxGraphics,
    Unknown(i32),
}

impl Emulation {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Emulation::Ascii,
            1 => Emulation::Ansi,
            2 => Emulation::Avatar,
            3 => Emulation::Rip,
            4 => Emulation::MaxGraphics,
            other => Emulation::Unknown(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Emulation::Ascii => 0,
            Emulation::Ansi => 1,
            Emulation::Avatar => 2,
            Emulation::Rip => 3,
            Emulation::MaxGraphics => 4,
            Emulation::Unknown(code) => code,
        }
    }

    /// Whether the remote terminal understands ANSI color and cursor sequences.
    /// Avatar, RIP and "max graphics" terminals all fall back to ANSI.
    pub fn supports_ansi(self) -> bool {
        matches!(
            self,
            Emulation::Ansi | Emulation::Avatar | Emulation::Rip | Emulation::MaxGraphics
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Emulation::Ascii => "ASCII",
            Emulation::Ansi => "ANSI",
            Emulation::Avatar => "AVATAR",
            Emulation::Rip => "RIP",
            Emulation::MaxGraphics => "MAX",
            Emulation::Unknown(_) => "UNKNOWN",
        }
    }
}
