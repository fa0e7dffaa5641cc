//! Value parsers shared by the subcommands.

use glam::DVec3;

/// Parses `x,y,z` into a point.
pub fn parse_center(s: &str) -> Result<DVec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in '{s}': {e}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got {} values", parts.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_center() {
        assert_eq!(parse_center("1,-2.5, 3").unwrap(), DVec3::new(1.0, -2.5, 3.0));
    }

    #[test]
    fn test_parse_center_rejects_bad_input() {
        assert!(parse_center("1,2").is_err());
        assert!(parse_center("1,2,3,4").is_err());
        assert!(parse_center("a,b,c").is_err());
    }
}
