// src/physics/valence.rs

use crate::io::numeric::safe_int;

/// Valence electron count from the raw hint column and the electron
/// configuration string (e.g. `"[Ne] 3s2 3p4"`).
///
/// * hint above 12: group number encoding, valence is `hint - 10`
/// * hint 1 or 2: used as is
/// * anything else (0, 3..=12): counted from the configuration
pub fn valence_electrons(raw_hint: u32, configuration: &str) -> u32 {
    match raw_hint {
        h if h > 12 => h - 10,
        1 | 2 => raw_hint,
        _ => outer_shell_electrons(configuration) + f_subshell_electrons(configuration),
    }
}

/// Same as [`valence_electrons`] for an unparsed hint field.
pub fn valence_from_fields(hint_field: &str, configuration: &str) -> u32 {
    valence_electrons(safe_int(hint_field), configuration)
}

/// Subshell tokens of a configuration: space separated, starting with a digit.
/// Noble gas cores such as `[Ar]` are dropped.
fn subshells(configuration: &str) -> impl Iterator<Item = &[u8]> {
    configuration
        .split(' ')
        .map(str::as_bytes)
        .filter(|t| t.first().is_some_and(u8::is_ascii_digit))
}

fn digit_at(bytes: &[u8], i: usize) -> Option<u32> {
    bytes
        .get(i)
        .filter(|b| b.is_ascii_digit())
        .map(|b| u32::from(b - b'0'))
}

/// Highest principal quantum number appearing in the configuration.
pub fn highest_shell(configuration: &str) -> Option<u32> {
    subshells(configuration).filter_map(|t| digit_at(t, 0)).max()
}

/// Electrons in the outermost shell.
///
/// Only the single occupancy digit after the subshell letter is read, so a
/// `3d10` token contributes 1. Tokens without that digit contribute nothing.
pub fn outer_shell_electrons(configuration: &str) -> u32 {
    let Some(shell) = highest_shell(configuration) else {
        return 0;
    };
    subshells(configuration)
        .filter(|t| digit_at(t, 0) == Some(shell))
        .filter_map(|t| digit_at(t, 2))
        .sum()
}

/// Electrons in every `f` subshell of the configuration, reading one or two
/// occupancy digits (`4f9`, `4f14`).
pub fn f_subshell_electrons(configuration: &str) -> u32 {
    let bytes = configuration.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'f')
        .filter_map(|(i, _)| {
            let tens = digit_at(bytes, i + 1)?;
            Some(match digit_at(bytes, i + 2) {
                Some(ones) => tens * 10 + ones,
                None => tens,
            })
        })
        .sum()
}
