use crate::error::StatsError;
use crate::stats::FastaStats;
use std::io::Write;

/// Serializes `stats` as JSON to `writer`, followed by a newline.
///
/// The pretty form uses two-space indentation; `compact` writes a single line.
pub fn write_report(
    writer: &mut impl Write,
    stats: &FastaStats,
    compact: bool,
) -> Result<(), StatsError> {
    // encode before writing anything, no partial report on failure
    let encoded = if compact {
        serde_json::to_vec(stats)?
    } else {
        serde_json::to_vec_pretty(stats)?
    };

    writer.write_all(&encoded).map_err(StatsError::Write)?;
    writeln!(writer).map_err(StatsError::Write)?;
    writer.flush().map_err(StatsError::Write)
}

#[cfg(test)]
mod tests {
    use super::write_report;
    use crate::stats::FastaStats;

    fn scenario() -> FastaStats {
        let mut stats = FastaStats::new();
        stats.add_record(b"ACGT");
        stats.add_record(b"AACCGGTT");
        stats.finalize();
        stats
    }

    #[test]
    fn pretty_report() {
        let mut out = Vec::new();
        write_report(&mut out, &scenario(), false).unwrap();

        let expected = "{
  \"min_len\": 4,
  \"max_len\": 8,
  \"mean_len\": 6.0,
  \"tot_len\": 12,
  \"num_records\": 2,
  \"count_a\": 3,
  \"count_c\": 3,
  \"count_g\": 3,
  \"count_t\": 3
}
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn compact_report_is_one_line() {
        let mut out = Vec::new();
        write_report(&mut out, &scenario(), true).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("{\"min_len\":4,"));
    }
}
