//! Token codec for spray commands.
//!
//! Wire format: `"{x}_{y}_{radius}_{density}_{color code}"` - five integer
//! fields joined by [`TOKEN_DELIMITER`]. Encoding is pure and total;
//! decoding rejects anything that is not exactly five parsable fields with a
//! registered color code.

use thiserror::Error;

use crate::constants::{TOKEN_DELIMITER, TOKEN_FIELD_COUNT};
use crate::types::{SprayColor, SprayCommand, Token};

/// Error type for token decoding.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed token {token:?}: {reason}")]
    MalformedToken { token: String, reason: String },
    #[error("unknown color code: {0}")]
    UnknownColorCode(u32),
}

/// Encode a spray command into its wire token.
pub fn encode(command: &SprayCommand) -> Token {
    let fields = [
        command.x,
        command.y,
        command.radius,
        command.density,
        command.color.code(),
    ];
    fields
        .map(|field| field.to_string())
        .join(&TOKEN_DELIMITER.to_string())
}

/// Decode a wire token back into a spray command.
///
/// Callers replaying stored history should skip tokens that fail here rather
/// than abort the batch; one corrupt entry must not lose the whole drawing.
pub fn decode(token: &str) -> Result<SprayCommand, CodecError> {
    let fields: Vec<&str> = token.split(TOKEN_DELIMITER).collect();
    if fields.len() != TOKEN_FIELD_COUNT {
        return Err(CodecError::MalformedToken {
            token: token.to_string(),
            reason: format!("expected {TOKEN_FIELD_COUNT} fields, got {}", fields.len()),
        });
    }

    let parse = |field: &str| -> Result<u32, CodecError> {
        field.parse().map_err(|_| CodecError::MalformedToken {
            token: token.to_string(),
            reason: format!("non-numeric field {field:?}"),
        })
    };

    let x = parse(fields[0])?;
    let y = parse(fields[1])?;
    let radius = parse(fields[2])?;
    let density = parse(fields[3])?;
    let code = parse(fields[4])?;
    let color = SprayColor::from_code(code).ok_or(CodecError::UnknownColorCode(code))?;

    Ok(SprayCommand {
        x,
        y,
        radius,
        density,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vector() {
        let command = SprayCommand {
            x: 120,
            y: 45,
            radius: 20,
            density: 20,
            color: SprayColor::Blue,
        };
        assert_eq!(encode(&command), "120_45_20_20_3");
    }

    #[test]
    fn decodes_known_vector() {
        let command = decode("120_45_20_20_3").unwrap();
        assert_eq!(
            command,
            SprayCommand {
                x: 120,
                y: 45,
                radius: 20,
                density: 20,
                color: SprayColor::Blue,
            }
        );
    }

    #[test]
    fn round_trips_all_colors() {
        for color in SprayColor::ALL {
            let command = SprayCommand {
                x: 0,
                y: 999,
                radius: 5,
                density: 100,
                color,
            };
            assert_eq!(decode(&encode(&command)).unwrap(), command);
        }
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            decode("120_45_20_20"),
            Err(CodecError::MalformedToken { .. })
        ));
        assert!(matches!(
            decode("120_45_20_20_3_9"),
            Err(CodecError::MalformedToken { .. })
        ));
        assert!(matches!(decode(""), Err(CodecError::MalformedToken { .. })));
    }

    #[test]
    fn rejects_non_numeric_field() {
        assert!(matches!(
            decode("120_forty_20_20_3"),
            Err(CodecError::MalformedToken { .. })
        ));
        assert!(matches!(
            decode("120_45_20_20_blue"),
            Err(CodecError::MalformedToken { .. })
        ));
    }

    #[test]
    fn rejects_unknown_color_code() {
        assert!(matches!(
            decode("120_45_20_20_7"),
            Err(CodecError::UnknownColorCode(7))
        ));
        assert!(matches!(
            decode("120_45_20_20_0"),
            Err(CodecError::UnknownColorCode(0))
        ));
    }
}
