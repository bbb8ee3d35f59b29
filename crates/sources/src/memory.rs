//! Memory (RAM) data source implementation

use barline_core::{DataSource, SourceError, SourceMetadata, SourceOutput, SourceResult, KB_PER_GB};
use barline_types::MemorySourceConfig;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Keys subtracted from `MemTotal` to get the memory in use
const RECLAIMABLE_KEYS: [&str; 4] = ["MemFree", "Buffers", "Cached", "SReclaimable"];

/// Parse `Key: value kB` lines; lines without a numeric value are skipped
pub fn parse_meminfo(meminfo: &str) -> HashMap<&str, u64> {
    meminfo
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let key = parts.next()?.trim_end_matches(':');
            let value = parts.next()?.parse().ok()?;
            Some((key, value))
        })
        .collect()
}

/// Memory in use in kB:
/// `MemTotal - MemFree - Buffers - Cached - SReclaimable`
pub fn used_kilobytes(meminfo: &HashMap<&str, u64>) -> SourceResult<i64> {
    let get = |key: &'static str| {
        meminfo
            .get(key)
            .map(|&value| value as i64)
            .ok_or(SourceError::MissingKey(key))
    };

    let mut used = get("MemTotal")?;
    for key in RECLAIMABLE_KEYS {
        used -= get(key)?;
    }
    Ok(used)
}

/// kB -> GB, rounded to two decimals, always with a fractional part.
///
/// Rounds the exact value of the quotient with ties to even, so `2.675`
/// (stored just below) becomes `2.67`. Trailing zeros are dropped down to
/// one decimal.
pub fn format_gigabytes(kilobytes: i64) -> String {
    let text = format!("{:.2}", kilobytes as f64 / KB_PER_GB);
    let trimmed = text.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// RAM in use read from `/proc/meminfo`
pub struct MemorySource {
    metadata: SourceMetadata,
    meminfo_path: PathBuf,
}

impl MemorySource {
    pub fn new(config: &MemorySourceConfig) -> Self {
        let metadata = SourceMetadata {
            id: "memory".to_string(),
            name: "Memory (RAM)".to_string(),
            description: "RAM in use, excluding buffers and caches".to_string(),
            default_interval: Duration::from_millis(3000),
        };

        Self {
            metadata,
            meminfo_path: config.meminfo_path.clone(),
        }
    }
}

impl DataSource for MemorySource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn query(&mut self) -> SourceResult<SourceOutput> {
        let meminfo = fs::read_to_string(&self.meminfo_path).map_err(|source| SourceError::Read {
            path: self.meminfo_path.clone(),
            source,
        })?;
        let used = used_kilobytes(&parse_meminfo(&meminfo))?;
        Ok(SourceOutput::text(format!("{} Gb", format_gigabytes(used))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MEMINFO: &str = "MemTotal:       16000000 kB
MemFree:         8000000 kB
MemAvailable:   10000000 kB
Buffers:          500000 kB
Cached:          1500000 kB
SwapCached:            0 kB
SReclaimable:          0 kB
HugePages_Total:       0
";

    #[test]
    fn test_parse_strips_colon() {
        let map = parse_meminfo(MEMINFO);
        assert_eq!(map.get("MemTotal"), Some(&16_000_000));
        assert_eq!(map.get("HugePages_Total"), Some(&0));
    }

    #[test]
    fn test_used_memory() {
        let used = used_kilobytes(&parse_meminfo(MEMINFO)).unwrap();
        assert_eq!(used, 6_000_000);
        assert_eq!(format_gigabytes(used), "6.0");
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        assert_eq!(format_gigabytes(1_234_567), "1.23");
        assert_eq!(format_gigabytes(2_500_000), "2.5");
        assert_eq!(format_gigabytes(0), "0.0");
        assert_eq!(format_gigabytes(10_000_000), "10.0");
    }

    #[test]
    fn test_rounding_ties() {
        // 1.125 is exact, so the tie goes to the even digit
        assert_eq!(format_gigabytes(1_125_000), "1.12");
        // 6.005 and 2.675 are stored slightly below the decimal value
        assert_eq!(format_gigabytes(6_005_000), "6.0");
        assert_eq!(format_gigabytes(2_675_000), "2.67");
    }

    #[test]
    fn test_missing_key() {
        let meminfo = MEMINFO.replace("SReclaimable:          0 kB\n", "");
        let err = used_kilobytes(&parse_meminfo(&meminfo)).unwrap_err();
        assert!(matches!(err, SourceError::MissingKey("SReclaimable")));
    }

    #[test]
    fn test_query_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MEMINFO.as_bytes()).unwrap();

        let config = MemorySourceConfig {
            meminfo_path: file.path().to_path_buf(),
            ..Default::default()
        };
        let mut source = MemorySource::new(&config);
        assert_eq!(source.query().unwrap().full_text, "6.0 Gb");
    }
}
