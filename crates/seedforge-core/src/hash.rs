//! Deterministic string hashing.
//!
//! Every hash that feeds into a seed identifier is a fixed two-lane DJB2
//! variant, independent of process, platform and compiler version.

/// DJB2 starting value.
const DJB2_SEED: i32 = 5381;

/// Both lanes start from the DJB2 seed folded into the upper half-word.
const LANE_SEED: i32 = (DJB2_SEED << 16).wrapping_add(DJB2_SEED);

/// Multiplier applied to the odd lane when the lanes are merged.
const LANE_MIX: i32 = 1_566_083_941;

/// Hashes `text` to a 32-bit value that is identical on every run and machine.
///
/// The text is consumed as UTF-16 code units, two at a time: even positions
/// feed the first lane, odd positions the second. All arithmetic wraps.
///
/// # Examples
///
/// ```
/// use seedforge_core::string_hash;
///
/// assert_eq!(string_hash("Foo 1"), string_hash("Foo 1"));
/// assert_ne!(string_hash("Foo 1"), string_hash("Foo 2"));
/// ```
pub fn string_hash(text: &str) -> i32 {
    let mut lane1 = LANE_SEED;
    let mut lane2 = LANE_SEED;

    let mut units = text.encode_utf16();
    while let Some(even) = units.next() {
        lane1 = mix(lane1, even);
        match units.next() {
            Some(odd) => lane2 = mix(lane2, odd),
            None => break,
        }
    }

    lane1.wrapping_add(lane2.wrapping_mul(LANE_MIX))
}

/// Hashes optional text; an absent value hashes to 0.
///
/// Note that `Some("")` does not hash to 0: the empty string still carries
/// the lane seeds.
pub fn optional_string_hash(text: Option<&str>) -> i32 {
    text.map_or(0, string_hash)
}

/// Folds a 64-bit value into 32 bits by XOR-ing its halves.
pub(crate) fn fold_u64(bits: u64) -> i32 {
    (bits as u32 ^ (bits >> 32) as u32) as i32
}

#[inline]
fn mix(lane: i32, unit: u16) -> i32 {
    (lane << 5).wrapping_add(lane) ^ i32::from(unit)
}
