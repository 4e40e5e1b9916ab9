//! Static stand-in for the plug-in action registry `spec.md` §6 describes.
//!
//! The real system discovers subcommands from a named registry group at
//! startup; that discovery mechanism is out of scope for this core (spec.md
//! §1 names "plug-in discovery and action dispatch" as a deliberate external
//! collaborator). What *is* in scope, per §9's design notes, is the
//! first-registration-wins conflict rule: if two registrations claim the
//! same subcommand name, the later one is skipped with a debug log rather
//! than silently overwriting the earlier one.

/// One entry a plug-in would contribute to the subcommand registry.
pub struct SubcommandSpec {
    pub name: &'static str,
    pub about: &'static str,
}

/// The compiled-in set of subcommands this binary ships with. A real plug-in
/// loader would append to this list at startup instead of hardcoding it.
const BUILTIN: &[SubcommandSpec] = &[
    SubcommandSpec { name: "chunk", about: "Chunk a file and print its boundaries" },
    SubcommandSpec { name: "hash-tree", about: "Print the hash-tree root over stdin lines" },
];

/// Resolve the final registry: walk registrations in order, keeping the
/// first claim of each name and logging a debug message for every later
/// duplicate instead of overwriting it.
pub fn resolve() -> Vec<&'static SubcommandSpec> {
    let mut seen = std::collections::HashSet::new();
    let mut resolved = Vec::new();

    for spec in BUILTIN {
        if seen.insert(spec.name) {
            resolved.push(spec);
        } else {
            log::debug!("subcommand '{}' already registered, skipping duplicate", spec.name);
        }
    }

    resolved
}
