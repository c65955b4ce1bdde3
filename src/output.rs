use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Write each record as one JSON object per line. Undefined metrics are written as `null`.
pub fn write_json_lines<W: Write, T: Serialize>(mut writer: W, records: &[T]) -> Result<usize> {
    for (i, record) in records.iter().enumerate() {
        serde_json::to_writer(&mut writer, record)
            .with_context(|| format!("failed to serialize record {}", i))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Brick, BrickType};
    use crate::renko::calculate_precursors;

    #[test]
    fn writes_one_object_per_brick() {
        let bricks = [
            Brick {
                timestamp_ms: 1_000,
                price: 105.0,
                brick_type: BrickType::Up,
                volume: 3.0,
                brick_size: 5.0,
            },
            Brick {
                timestamp_ms: 2_000,
                price: 100.0,
                brick_type: BrickType::Down,
                volume: 1.0,
                brick_size: 5.0,
            },
        ];
        let annotated = calculate_precursors(&bricks, 2);

        let mut buf = Vec::new();
        let written = write_json_lines(&mut buf, &annotated).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "UP");
        assert_eq!(lines[0]["brick_size"], 5.0);
        assert!(lines[0]["vol_ma"].is_null());
        assert!(lines[0]["squeeze_score"].is_null());
        assert_eq!(lines[1]["type"], "DOWN");
        assert_eq!(lines[1]["vol_ma"], 2.0);
        assert_eq!(lines[1]["flip"], 1);
        assert_eq!(lines[1]["direction"], -1);
    }
}
