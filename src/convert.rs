// src/convert.rs

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Area units the marketplace quotes plot sizes in. Listings themselves only
/// carry `SquareFeet` or `Acres`; the converter supports the full set the
/// area-calculator surface offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaUnit {
    SquareFeet,
    SquareMeters,
    Acres,
    Hectares,
    SquareYards,
    SquareInches,
}

#[derive(Debug)]
pub enum ConvertError {
    /// The unit key from the wire (or user input) names no known unit.
    InvalidUnit(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidUnit(key) => write!(f, "Invalid area unit: {key}"),
        }
    }
}

impl Error for ConvertError {}

/// Multiplicative factors, `FACTORS[from][to]`, pre-computed relative to
/// square feet as the canonical unit. Row/column order matches the enum
/// declaration order.
#[rustfmt::skip]
const FACTORS: [[f64; 6]; 6] = [
    // from square feet
    [1.0,                   0.09290304,           2.295684113865932e-5,  9.290304e-6,     0.1111111111111111,   144.0],
    // from square meters
    [10.763910416709722,    1.0,                  2.4710538146716534e-4, 1.0e-4,          1.1959900463010803,   1550.0031000062002],
    // from acres
    [43560.0,               4046.8564224,         1.0,                   0.40468564224,   4840.0,               6272640.0],
    // from hectares
    [107639.10416709722,    10000.0,              2.4710538146716534,    1.0,             11959.900463010803,   15500031.000062],
    // from square yards
    [9.0,                   0.83612736,           2.0661157024793389e-4, 8.3612736e-5,    1.0,                  1296.0],
    // from square inches
    [0.006944444444444444,  6.4516e-4,            1.5942250790735639e-7, 6.4516e-8,       7.716049382716049e-4, 1.0],
];

impl AreaUnit {
    pub const ALL: [AreaUnit; 6] = [
        AreaUnit::SquareFeet,
        AreaUnit::SquareMeters,
        AreaUnit::Acres,
        AreaUnit::Hectares,
        AreaUnit::SquareYards,
        AreaUnit::SquareInches,
    ];

    fn index(&self) -> usize {
        match self {
            AreaUnit::SquareFeet => 0,
            AreaUnit::SquareMeters => 1,
            AreaUnit::Acres => 2,
            AreaUnit::Hectares => 3,
            AreaUnit::SquareYards => 4,
            AreaUnit::SquareInches => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "squareFeet",
            AreaUnit::SquareMeters => "squareMeters",
            AreaUnit::Acres => "acres",
            AreaUnit::Hectares => "hectares",
            AreaUnit::SquareYards => "squareYards",
            AreaUnit::SquareInches => "squareInches",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AreaUnit {
    type Err = ConvertError;

    /// Accepts both the calculator's camelCase keys and the short forms the
    /// listing API uses ("sqft", "acres").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squareFeet" | "sqft" => Ok(AreaUnit::SquareFeet),
            "squareMeters" | "sqm" => Ok(AreaUnit::SquareMeters),
            "acres" | "acre" => Ok(AreaUnit::Acres),
            "hectares" | "hectare" => Ok(AreaUnit::Hectares),
            "squareYards" | "sqyd" => Ok(AreaUnit::SquareYards),
            "squareInches" | "sqin" => Ok(AreaUnit::SquareInches),
            other => Err(ConvertError::InvalidUnit(other.to_string())),
        }
    }
}

/// Converts an area between units via a single table lookup. Total over the
/// enum: invalid unit keys are rejected earlier, where strings are parsed
/// (`AreaUnit::from_str`). Negative values convert proportionally; rejecting
/// them is the caller's job.
pub fn convert(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    value * FACTORS[from.index()][to.index()]
}
