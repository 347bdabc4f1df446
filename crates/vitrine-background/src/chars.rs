//! Glyph tables for the particle field.

/// Glyphs for small particles (size bucket 0).
pub const SMALL_PARTICLE_CHARS: &[char] = &['·', '.', '°'];

/// Glyphs for medium particles (size bucket 1).
pub const MEDIUM_PARTICLE_CHARS: &[char] = &['•', '*', '✧'];

/// Glyphs for large particles (size bucket 2).
pub const LARGE_PARTICLE_CHARS: &[char] = &['❄', '❅', '✦'];

/// Pick a stable glyph for a particle from its batch id and size bucket.
pub fn particle_char(id: usize, size_bucket: u8) -> char {
    let table = match size_bucket {
        0 => SMALL_PARTICLE_CHARS,
        1 => MEDIUM_PARTICLE_CHARS,
        _ => LARGE_PARTICLE_CHARS,
    };
    table[id % table.len()]
}
