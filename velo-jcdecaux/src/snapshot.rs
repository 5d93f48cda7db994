use crate::{
    error::{JcdecauxError, Result},
    stands::{Position, Stands},
};
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::{cmp::Ordering, collections::HashMap, hash::Hash};

/// Timestamp format written into the history file (ISO-8601; fractional
/// seconds are optional on read).
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Expected number of columns in a history CSV row.
pub const CSV_ROW_LENGTH: usize = 8;

/// One station row captured by one poll of the JCDecaux API.
///
/// Position and stands cells keep the serialized form they have in the
/// history file; the accessor methods parse them on demand and report
/// malformed cells as missing values.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Station identifier within the contract
    pub number: u32,
    pub name: String,
    pub address: String,
    /// Serialized `{"latitude": .., "longitude": ..}` cell
    pub position: String,
    /// Operational status reported by the API ("OPEN" / "CLOSED")
    pub status: String,
    /// Serialized stands block backing the map view
    pub main_stands: String,
    /// Serialized stands block covering the whole station
    pub total_stands: String,
    /// Wall-clock time the snapshot was taken
    pub snapshot_time: NaiveDateTime,
}

impl Snapshot {
    /// Station coordinates as `(latitude, longitude)`, if the cell parses.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Position::parse(&self.position).map(|p| (p.latitude, p.longitude))
    }

    /// Bikes available at the main stands, if the cell parses.
    pub fn bikes_available(&self) -> Option<u32> {
        Stands::parse(&self.main_stands).map(|s| s.availabilities.bikes)
    }

    /// Bikes available across the whole station, if the cell parses.
    pub fn total_bikes_available(&self) -> Option<u32> {
        Stands::parse(&self.total_stands).map(|s| s.availabilities.bikes)
    }

    /// Total dock capacity of the station, if the cell parses.
    pub fn capacity(&self) -> Option<u32> {
        Stands::parse(&self.total_stands).map(|s| s.capacity)
    }

    /// Group a vector of snapshots by station number.
    pub fn vector_to_hashmap(snapshots: Vec<Snapshot>) -> HashMap<u32, Vec<Snapshot>> {
        let mut result: HashMap<u32, Vec<Snapshot>> = HashMap::new();
        for snapshot in snapshots {
            result.entry(snapshot.number).or_default().push(snapshot);
        }
        result
    }
}

impl TryFrom<StringRecord> for Snapshot {
    type Error = JcdecauxError;

    fn try_from(value: StringRecord) -> Result<Self> {
        if value.len() != CSV_ROW_LENGTH {
            return Err(JcdecauxError::InvalidFormat(format!(
                "expected {} columns, found {}",
                CSV_ROW_LENGTH,
                value.len()
            )));
        }

        let field = |index: usize, label: &str| {
            value
                .get(index)
                .map(str::to_string)
                .ok_or_else(|| JcdecauxError::InvalidFormat(format!("missing {} field", label)))
        };

        let number = field(0, "number")?.parse::<u32>().map_err(|_| {
            JcdecauxError::InvalidFormat(format!(
                "station number is not numeric: {}",
                value.get(0).unwrap_or_default()
            ))
        })?;

        let snapshot_time = NaiveDateTime::parse_from_str(&field(7, "snapshot_time")?, TIME_FORMAT)?;

        Ok(Snapshot {
            number,
            name: field(1, "name")?,
            address: field(2, "address")?,
            position: field(3, "position")?,
            status: field(4, "status")?,
            main_stands: field(5, "main_stands")?,
            total_stands: field(6, "total_stands")?,
            snapshot_time,
        })
    }
}

impl Hash for Snapshot {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.number.hash(state);
        self.snapshot_time.hash(state);
    }
}

impl Ord for Snapshot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.snapshot_time.cmp(&other.snapshot_time)
    }
}

impl Eq for Snapshot {}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot_time == other.snapshot_time && self.number == other.number
    }
}

impl PartialOrd for Snapshot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    fn sample_record() -> StringRecord {
        record(&[
            "385",
            "00385 - VITARELLES - FRONDE",
            "21, chemin de la Fronde",
            r#"{"latitude":43.6412,"longitude":1.4153}"#,
            "OPEN",
            r#"{"availabilities":{"bikes":5,"stands":10},"capacity":15}"#,
            r#"{"availabilities":{"bikes":6,"stands":12},"capacity":18}"#,
            "2024-06-01T08:15:00.123456",
        ])
    }

    #[test]
    fn test_record_to_snapshot() {
        let snapshot: Snapshot = sample_record().try_into().unwrap();
        assert_eq!(snapshot.number, 385);
        assert_eq!(snapshot.name, "00385 - VITARELLES - FRONDE");
        assert_eq!(snapshot.status, "OPEN");
        assert_eq!(snapshot.bikes_available(), Some(5));
        assert_eq!(snapshot.total_bikes_available(), Some(6));
        assert_eq!(snapshot.capacity(), Some(18));
        assert_eq!(snapshot.coordinates(), Some((43.6412, 1.4153)));
        assert_eq!(
            snapshot.snapshot_time.format("%Y-%m-%d %H:%M").to_string(),
            "2024-06-01 08:15"
        );
    }

    #[test]
    fn test_record_without_fractional_seconds() {
        let mut fields: Vec<String> = sample_record().iter().map(str::to_string).collect();
        fields[7] = "2024-06-01T08:30:00".to_string();
        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
        let snapshot: Snapshot = record(&fields).try_into().unwrap();
        assert_eq!(
            snapshot.snapshot_time.format("%H:%M:%S").to_string(),
            "08:30:00"
        );
    }

    #[test]
    fn test_wrong_column_count_is_invalid() {
        let result: Result<Snapshot> = record(&["385", "name"]).try_into();
        assert!(matches!(result, Err(JcdecauxError::InvalidFormat(_))));
    }

    #[test]
    fn test_malformed_cells_are_missing_values() {
        let snapshot = Snapshot {
            number: 29,
            name: "00029 - VALADE".to_string(),
            address: "31 RUE VALADE".to_string(),
            position: "not json".to_string(),
            status: "OPEN".to_string(),
            main_stands: String::new(),
            total_stands: "{}".to_string(),
            snapshot_time: NaiveDateTime::parse_from_str("2024-06-01T09:00:00", TIME_FORMAT)
                .unwrap(),
        };
        assert_eq!(snapshot.coordinates(), None);
        assert_eq!(snapshot.bikes_available(), None);
        assert_eq!(snapshot.capacity(), None);
    }

    #[test]
    fn test_vector_to_hashmap_groups_by_station() {
        let a: Snapshot = sample_record().try_into().unwrap();
        let mut b = a.clone();
        b.snapshot_time += chrono::Duration::minutes(10);
        let mut c = a.clone();
        c.number = 29;
        let grouped = Snapshot::vector_to_hashmap(vec![a, b, c]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&385].len(), 2);
        assert_eq!(grouped[&29].len(), 1);
    }
}
