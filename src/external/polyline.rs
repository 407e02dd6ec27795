//! Decoding of Google's encoded polyline format.
//!
//! Each coordinate is a pair of zig-zag encoded deltas from the previous
//! point, scaled by 1e5 and written as 5-bit chunks offset by 63.

use geo_types::{Coord, LineString};

use crate::error::{upstream_error, Error};

const FACTOR: f64 = 1e5;

pub fn decode(encoded: &str) -> Result<LineString<f64>, Error> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut coords = Vec::new();

    while index < bytes.len() {
        lat = lat
            .checked_add(next_delta(bytes, &mut index)?)
            .ok_or_else(upstream_error)?;
        lng = lng
            .checked_add(next_delta(bytes, &mut index)?)
            .ok_or_else(upstream_error)?;

        coords.push(Coord {
            x: lng as f64 / FACTOR,
            y: lat as f64 / FACTOR,
        });
    }

    Ok(LineString::new(coords))
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, Error> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes.get(*index).ok_or_else(upstream_error)?;
        *index += 1;

        if !(63..127).contains(&byte) || shift > 60 {
            return Err(upstream_error());
        }

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    if result & 1 == 1 {
        Ok(!(result >> 1))
    } else {
        Ok(result >> 1)
    }
}

#[test]
fn decodes_reference_polyline() {
    let line = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
    let points: Vec<(f64, f64)> = line.coords().map(|c| (c.y, c.x)).collect();

    assert_eq!(
        points,
        vec![(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]
    );
}

#[test]
fn rejects_truncated_input() {
    // a continuation chunk with nothing after it
    assert!(decode("_p~iF~ps|U_").is_err());
    assert!(decode("").unwrap().0.is_empty());
}

#[test]
fn rejects_overflowing_deltas() {
    // each pair is a delta near 2^62; the running sum leaves i64
    let encoded = "}~~~~~~~~~~~F".repeat(6);

    assert!(decode(&encoded).is_err());
}
