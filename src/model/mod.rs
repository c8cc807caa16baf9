/// Beatmap related types.
pub mod beatmap;

/// Mod related types.
pub mod mods;

/// Note related types.
pub mod note;
