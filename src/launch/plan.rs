// Static per-platform launch command tables
//
// Each launcher variant is a declarative ordered list of binaries; the
// per-platform command sequence is derived from that data, so adding a
// binary or a platform is a data change, not new branching logic.

use crate::launch::command::{CommandSequence, CommandSpec};
use crate::launch::error::{LaunchError, LaunchResult};
use crate::platform::PlatformClass;

/// A launcher variant: the ordered set of product binaries it brings up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Name used in logs
    pub name: &'static str,
    /// Binary paths relative to the repository root, launch order significant
    pub binaries: &'static [&'static str],
}

/// Multi-binary product launch: the key rotation helper runs first, then
/// the service itself.
pub const SERVER_PLAN: LaunchPlan = LaunchPlan {
    name: "server",
    binaries: &[
        "config/update_server_keys/target/release/update_server_keys",
        "server/target/release/server",
    ],
};

/// Single-binary launch for the terminal client
pub const TUI_PLAN: LaunchPlan = LaunchPlan {
    name: "tui",
    binaries: &["tui/target/release/tui"],
};

impl LaunchPlan {
    /// Build the command sequence for this plan on the given platform.
    ///
    /// POSIX sequences grant execute permission to every binary before any
    /// of them runs, preserving per-binary order in both halves. Windows
    /// sequences run the binaries directly; permission grants are not
    /// meaningful there.
    pub fn command_sequence(&self, platform: PlatformClass) -> LaunchResult<CommandSequence> {
        match platform {
            PlatformClass::Windows => Ok(self
                .binaries
                .iter()
                .map(|path| CommandSpec::new(format!(".\\{}.exe", path.replace('/', "\\"))))
                .collect()),
            PlatformClass::Posix => {
                let mut sequence = Vec::with_capacity(self.binaries.len() * 2);
                for path in self.binaries {
                    sequence.push(CommandSpec::with_args(
                        "chmod",
                        ["u+x".to_string(), format!("./{}", path)],
                    ));
                }
                for path in self.binaries {
                    sequence.push(CommandSpec::new(format!("./{}", path)));
                }
                Ok(sequence)
            }
            PlatformClass::Unsupported => Err(LaunchError::unsupported(std::env::consts::OS)),
        }
    }
}
