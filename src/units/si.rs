//! SI unit symbols and decimal prefixes
//!
//! Lookup tables mapping textual unit symbols to their dimension and
//! power-of-ten magnitude. The mass base quantity is the kilogram, so
//! the symbol `g` carries magnitude −3 and composes with prefixes the
//! usual way (`mg` = −6).

use super::dimension::Dimension;

/// One entry in the unit symbol table
#[derive(Debug, Clone, Copy)]
pub struct UnitSymbol {
    /// Textual symbol as written in source (`"V"`, `"mol"`, ...)
    pub symbol: &'static str,
    /// Dimension of the unit
    pub dimension: Dimension,
    /// Power-of-ten offset from the SI-base rendition
    pub magnitude: i32,
    /// Whether a decimal prefix may be attached (`kg` already carries one)
    pub prefixable: bool,
}

/// Base and derived unit symbols, longest symbols first so that
/// whole-symbol matching wins over prefix splitting (`mol` is the mole,
/// not milli-`ol`).
pub const SYMBOLS: &[UnitSymbol] = &[
    UnitSymbol {
        symbol: "Ohm",
        dimension: Dimension::RESISTANCE,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "mol",
        dimension: Dimension::AMOUNT,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "Hz",
        dimension: Dimension::FREQUENCY,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "Pa",
        dimension: Dimension::PRESSURE,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "kg",
        dimension: Dimension::MASS,
        magnitude: 0,
        prefixable: false,
    },
    UnitSymbol {
        symbol: "cd",
        dimension: Dimension::LUMINOSITY,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "g",
        dimension: Dimension::MASS,
        magnitude: -3,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "m",
        dimension: Dimension::LENGTH,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "s",
        dimension: Dimension::TIME,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "A",
        dimension: Dimension::CURRENT,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "K",
        dimension: Dimension::TEMPERATURE,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "N",
        dimension: Dimension::FORCE,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "J",
        dimension: Dimension::ENERGY,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "W",
        dimension: Dimension::POWER,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "C",
        dimension: Dimension::CHARGE,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "V",
        dimension: Dimension::VOLTAGE,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "F",
        dimension: Dimension::CAPACITANCE,
        magnitude: 0,
        prefixable: true,
    },
    UnitSymbol {
        symbol: "S",
        dimension: Dimension::CONDUCTANCE,
        magnitude: 0,
        prefixable: true,
    },
];

/// Decimal prefixes, two-character prefixes first
pub const PREFIXES: &[(&str, i32)] = &[
    ("da", 1),
    ("Y", 24),
    ("Z", 21),
    ("E", 18),
    ("P", 15),
    ("T", 12),
    ("G", 9),
    ("M", 6),
    ("k", 3),
    ("h", 2),
    ("d", -1),
    ("c", -2),
    ("m", -3),
    ("u", -6),
    ("µ", -6),
    ("n", -9),
    ("p", -12),
    ("f", -15),
    ("a", -18),
    ("z", -21),
    ("y", -24),
];

/// Look up a bare symbol (no prefix)
pub fn lookup_symbol(token: &str) -> Option<&'static UnitSymbol> {
    SYMBOLS.iter().find(|u| u.symbol == token)
}

/// Resolve a token to (dimension, magnitude)
///
/// Tries a whole-symbol match first, then a single decimal prefix
/// followed by a prefixable symbol.
pub fn resolve_symbol(token: &str) -> Option<(Dimension, i32)> {
    if let Some(sym) = lookup_symbol(token) {
        return Some((sym.dimension, sym.magnitude));
    }

    for (prefix, power) in PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            if let Some(sym) = lookup_symbol(rest) {
                if sym.prefixable {
                    return Some((sym.dimension, sym.magnitude + power));
                }
            }
        }
    }

    None
}

/// Render a (dimension, magnitude) pair as a prefixed symbol if one exists
///
/// Prefers an exact symbol (`V`, `kg`), then a prefixed one (`mV`, `mg`).
pub fn symbol_for(dimension: &Dimension, magnitude: i32) -> Option<String> {
    // Exact symbol, no prefix
    for sym in SYMBOLS {
        if sym.dimension.equals(dimension) && sym.magnitude == magnitude {
            return Some(sym.symbol.to_string());
        }
    }

    // Prefixed symbol; skip aliases so `µ` never wins over `u`
    for sym in SYMBOLS {
        if !sym.prefixable || !sym.dimension.equals(dimension) {
            continue;
        }
        let delta = magnitude - sym.magnitude;
        for (prefix, power) in PREFIXES {
            if *prefix == "µ" {
                continue;
            }
            if *power == delta {
                return Some(format!("{}{}", prefix, sym.symbol));
            }
        }
    }

    None
}
