//! Geohashing by successive bisection of a bounding box
//!
//! This computes the same cells as the integer-backed codec, but one bit at a
//! time using floating-point bounds instead of fixed-point axis indices. It is
//! slower, but it is not limited to the 64 bits of a `HashInt`, which is what
//! makes geohashes longer than 12 characters possible.

use crate::{
    base32::{self, ALPHABET},
    range::{LAT_MAX, LNG_MAX},
    Coordinate, Result,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value of each bit of a character, in the order in which bits are produced
static BIT_WEIGHTS: [u8; 5] = [16, 8, 4, 2, 1];

/// Coordinate axis being bisected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Lat,
    Lng,
}

impl Axis {
    /// Geohash bits alternate between axes, starting with longitude
    const FIRST: Axis = Axis::Lng;

    fn other(self) -> Self {
        match self {
            Axis::Lat => Axis::Lng,
            Axis::Lng => Axis::Lat,
        }
    }
}

/// Rectangular cell of the earth's surface covered by a geohash
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl Bounds {
    /// The whole coordinate domain, i.e. the cell of the empty geohash
    pub const WORLD: Bounds = Bounds {
        lat_min: -LAT_MAX,
        lat_max: LAT_MAX,
        lng_min: -LNG_MAX,
        lng_max: LNG_MAX,
    };

    /// Center of the cell, the best single-point estimate of a geohash
    pub fn center(&self) -> Coordinate {
        Coordinate {
            lat: (self.lat_min + self.lat_max) / 2.0,
            lng: (self.lng_min + self.lng_max) / 2.0,
        }
    }

    /// Truth that a coordinate lies within the cell, edges included
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.lat_min..=self.lat_max).contains(&coord.lat)
            && (self.lng_min..=self.lng_max).contains(&coord.lng)
    }

    /// Extent of the cell as (latitude span, longitude span) in degrees
    pub fn size(&self) -> (f64, f64) {
        (self.lat_max - self.lat_min, self.lng_max - self.lng_min)
    }

    fn mid(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Lat => (self.lat_min + self.lat_max) / 2.0,
            Axis::Lng => (self.lng_min + self.lng_max) / 2.0,
        }
    }

    /// Keep the upper or lower half of the cell along one axis
    fn halve(&mut self, axis: Axis, upper: bool) {
        let mid = self.mid(axis);
        let (min, max) = match axis {
            Axis::Lat => (&mut self.lat_min, &mut self.lat_max),
            Axis::Lng => (&mut self.lng_min, &mut self.lng_max),
        };
        if upper {
            *min = mid;
        } else {
            *max = mid;
        }
    }
}

/// Compute the `chars`-character geohash of a coordinate
pub fn encode(coord: Coordinate, chars: usize) -> String {
    let mut bounds = Bounds::WORLD;
    let mut axis = Axis::FIRST;
    let mut hash = String::with_capacity(chars);
    while hash.len() < chars {
        let mut value = 0;
        for weight in BIT_WEIGHTS {
            let x = match axis {
                Axis::Lat => coord.lat,
                Axis::Lng => coord.lng,
            };
            let upper = x >= bounds.mid(axis);
            if upper {
                value |= weight;
            }
            bounds.halve(axis, upper);
            axis = axis.other();
        }
        hash.push(char::from(ALPHABET[value as usize]));
    }
    hash
}

/// Compute the cell covered by a geohash of any length
pub fn decode_bounds(hash: &str) -> Result<Bounds> {
    let mut bounds = Bounds::WORLD;
    let mut axis = Axis::FIRST;
    for (position, c) in hash.chars().enumerate() {
        let value = base32::parse_char(c, position)?;
        for weight in BIT_WEIGHTS {
            bounds.halve(axis, value & weight != 0);
            axis = axis.other();
        }
    }
    Ok(bounds)
}
