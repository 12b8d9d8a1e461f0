//! Letter avatar derivation.
//!
//! A username maps to a background color and a single-letter label. The hash
//! runs over UTF-16 code units with 32-bit wrapping arithmetic so that colors
//! match the ones browsers compute for the same account.

/// Color and label for a letter avatar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterAvatar {
    /// `#rrggbb`, lowercase hex
    pub color: String,
    /// Uppercased first character, or `?` for an empty name
    pub initial: String,
}

impl LetterAvatar {
    pub fn for_name(name: &str) -> Self {
        Self {
            color: string_to_color(name),
            initial: initial(name),
        }
    }
}

/// Fold the name into a signed 32-bit hash
fn string_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// Derive a deterministic `#rrggbb` color from a string
pub fn string_to_color(s: &str) -> String {
    let hash = string_hash(s);
    let mut color = String::with_capacity(7);
    color.push('#');
    for i in 0..3 {
        let value = (hash >> (i * 8)) & 0xff;
        color.push_str(&format!("{:02x}", value));
    }
    color
}

fn initial(name: &str) -> String {
    match name.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => "?".to_string(),
    }
}
