use eyre::Result;
use itemsort::fs::detect_items_file_in;
use itemsort::types::{CsvSource, RecordSource, SortMode};
use itemsort::sort_items;
use tempfile::tempdir;

#[test]
fn csv_source_loads_and_sorts() -> Result<()> {
    let tmpdir = tempdir()?;
    let tmp = tmpdir.path().to_path_buf();

    std::fs::write(
        tmp.join("items.csv"),
        "id,createdAt,filename,owner\n\
         1,2024-05-01T09:00:00Z,img10.png,ann\n\
         2,2024-05-01 08:00:00,img2.png,bob\n\
         \n\
         3,2024-04-30,007.txt,cy\n\
         4,2024-05-02T00:00:00+02:00,07.txt,dee\n",
    )?;

    let path = detect_items_file_in(&tmp, None)?;
    let records = CsvSource::new(&path).list()?;
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].filename, "img10.png");

    let by_name = sort_items(&records, SortMode::FilenameAscending);
    let names: Vec<_> = by_name.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, ["007.txt", "07.txt", "img2.png", "img10.png"]);

    // 07.txt is 2024-05-01T22:00:00Z once its offset is applied.
    let by_created = sort_items(&records, SortMode::CreatedAscending);
    let names: Vec<_> = by_created.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, ["007.txt", "img2.png", "img10.png", "07.txt"]);

    let newest_first = sort_items(&records, SortMode::CreatedDescending);
    assert_eq!(newest_first[0].filename, "07.txt");

    Ok(())
}

#[test]
fn csv_source_reports_missing_file() {
    let tmpdir = tempdir().unwrap();
    let err = CsvSource::new(tmpdir.path().join("gone.csv"))
        .list()
        .unwrap_err();
    assert!(format!("{err:#}").contains("gone.csv"));
}
