//! Built-in moduli for fields that are configured by degree alone.

/// Lowest-weight irreducible polynomial of each degree `1..=64`, without its
/// leading `x^n` term.
///
/// A trinomial `x^n + x^k + 1` with the smallest `k` is listed when one exists,
/// otherwise the pentanomial with the lexicographically smallest middle
/// exponents.
pub const LOW_WEIGHT_IRREDUCIBLES: phf::Map<u32, u64> = phf::phf_map! {
    1u32 => 0x1,
    2u32 => 0x3,
    3u32 => 0x3,
    4u32 => 0x3,
    5u32 => 0x5,
    6u32 => 0x3,
    7u32 => 0x3,
    8u32 => 0x1b,
    9u32 => 0x3,
    10u32 => 0x9,
    11u32 => 0x5,
    12u32 => 0x9,
    13u32 => 0x1b,
    14u32 => 0x21,
    15u32 => 0x3,
    16u32 => 0x2b,
    17u32 => 0x9,
    18u32 => 0x9,
    19u32 => 0x27,
    20u32 => 0x9,
    21u32 => 0x5,
    22u32 => 0x3,
    23u32 => 0x21,
    24u32 => 0x1b,
    25u32 => 0x9,
    26u32 => 0x1b,
    27u32 => 0x27,
    28u32 => 0x3,
    29u32 => 0x5,
    30u32 => 0x3,
    31u32 => 0x9,
    32u32 => 0x8d,
    33u32 => 0x401,
    34u32 => 0x81,
    35u32 => 0x5,
    36u32 => 0x201,
    37u32 => 0x53,
    38u32 => 0x63,
    39u32 => 0x11,
    40u32 => 0x39,
    41u32 => 0x9,
    42u32 => 0x81,
    43u32 => 0x59,
    44u32 => 0x21,
    45u32 => 0x1b,
    46u32 => 0x3,
    47u32 => 0x21,
    48u32 => 0x2d,
    49u32 => 0x201,
    50u32 => 0x1d,
    51u32 => 0x4b,
    52u32 => 0x9,
    53u32 => 0x47,
    54u32 => 0x201,
    55u32 => 0x81,
    56u32 => 0x95,
    57u32 => 0x11,
    58u32 => 0x80001,
    59u32 => 0x95,
    60u32 => 0x3,
    61u32 => 0x27,
    62u32 => 0x20000001,
    63u32 => 0x3,
    64u32 => 0x1b,
};

/// Extension degree of the default field.
pub const DEFAULT_DEGREE: u32 = 3;

/// Largest degree covered by [`LOW_WEIGHT_IRREDUCIBLES`].
pub const MAX_TABULATED_DEGREE: u32 = 64;
