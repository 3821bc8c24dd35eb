use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use vitals_ingest::select_latest;
use vitals_model::CandidateFile;

fn timestamp(offset_minutes: i64) -> String {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    (base + Duration::minutes(offset_minutes))
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

fn dated_name(day_offset: i64) -> (String, NaiveDate) {
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(day_offset);
    (format!("health_{}.csv", date.format("%Y-%m-%d")), date)
}

proptest! {
    #[test]
    fn dated_file_beats_any_undated_file(
        undated_mtimes in prop::collection::vec(0i64..1_000_000, 1..8),
        dated_day in 0i64..365,
        dated_mtime in 0i64..10,
        insert_at in 0usize..8,
    ) {
        let mut files: Vec<CandidateFile> = undated_mtimes
            .iter()
            .enumerate()
            .map(|(i, m)| CandidateFile::new(format!("u{i}"), format!("export ({i}).csv"), timestamp(*m)))
            .collect();
        let (name, _) = dated_name(dated_day);
        let position = insert_at.min(files.len());
        files.insert(position, CandidateFile::new("dated", name, timestamp(dated_mtime)));

        prop_assert_eq!(&select_latest(&files).unwrap().id, "dated");
    }

    #[test]
    fn undated_files_pick_latest_mtime(
        mtimes in prop::collection::btree_set(0i64..1_000_000, 2..10),
    ) {
        let mtimes: Vec<i64> = mtimes.into_iter().collect();
        let newest = *mtimes.iter().max().unwrap();
        // Listing order should not matter; reverse it to defeat "already sorted".
        let files: Vec<CandidateFile> = mtimes
            .iter()
            .rev()
            .map(|m| CandidateFile::new(format!("f{m}"), "export.csv", timestamp(*m)))
            .collect();

        prop_assert_eq!(select_latest(&files).unwrap().id.clone(), format!("f{newest}"));
    }

    #[test]
    fn newest_name_date_wins_regardless_of_mtime(
        days in prop::collection::btree_set(0i64..2000, 2..10),
        mtimes in prop::collection::vec(0i64..1_000_000, 10),
    ) {
        let days: Vec<i64> = days.into_iter().collect();
        let newest = *days.iter().max().unwrap();
        let files: Vec<CandidateFile> = days
            .iter()
            .zip(mtimes.iter())
            .map(|(d, m)| {
                let (name, _) = dated_name(*d);
                CandidateFile::new(format!("d{d}"), name, timestamp(*m))
            })
            .collect();

        prop_assert_eq!(select_latest(&files).unwrap().id.clone(), format!("d{newest}"));
    }
}

#[test]
fn invalid_embedded_date_counts_as_undated() {
    let files = vec![
        CandidateFile::new("bogus", "health_2025-99-99.csv", timestamp(0)),
        CandidateFile::new("recent", "export.csv", timestamp(10)),
    ];
    assert_eq!(select_latest(&files).unwrap().id, "recent");
}
