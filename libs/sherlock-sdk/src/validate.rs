//! Argument checks run before a request is built.

use crate::contract::invalid;
use crate::errors::Failure;

/// Fail with `message` unless `ok`.
pub fn ensure(ok: bool, message: impl Into<String>) -> Result<(), Failure> {
    if ok { Ok(()) } else { Err(invalid(message)) }
}

pub fn non_empty(value: &str, message: &str) -> Result<(), Failure> {
    ensure(!value.is_empty(), message)
}

/// `value > 0`; NaN is rejected too.
pub fn positive(value: f64, message: &str) -> Result<(), Failure> {
    ensure(value > 0.0, message)
}

/// `true` when `value` is listed, or when no list is available.
pub fn listed(names: Option<&[String]>, value: &str) -> bool {
    names.is_none_or(|names| names.iter().any(|name| name == value))
}

/// `azimuth,elevation` in degrees.
pub fn check_orientation(orientation: &str) -> Result<(), &'static str> {
    let parts: Vec<&str> = orientation.split(',').collect();
    let [azimuth, elevation] = parts.as_slice() else {
        return Err("Number of spherical coordinates is invalid.");
    };
    if !is_number(azimuth) {
        return Err("Azimuth value is invalid.");
    }
    if !is_number(elevation) {
        return Err("Elevation value is invalid.");
    }
    Ok(())
}

/// `x,y,z` with at least one non-zero component.
pub fn check_load_direction(direction: &str) -> Result<(), &'static str> {
    let parts: Vec<&str> = direction.split(',').collect();
    if parts.len() != 3 {
        return Err("Number of load direction coordinates is invalid.");
    }
    let mut any_non_zero = false;
    for part in parts {
        let value: f64 = part
            .trim()
            .parse()
            .map_err(|_| "Load direction coordinate is invalid.")?;
        if !value.is_finite() {
            return Err("Load direction coordinate is invalid.");
        }
        any_non_zero |= value != 0.0;
    }
    if any_non_zero {
        Ok(())
    } else {
        Err("At least one direction coordinate must be non-zero.")
    }
}

fn is_number(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok_and(f64::is_finite)
}
