use chrono::Local;
use eyre::Result;
use itemsort::Record;
use std::cmp::Ordering;
use std::io::Write;

pub fn write_text<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    for record in records {
        let created = record.created_at.with_timezone(&Local);
        writeln!(
            out,
            "{}  {}",
            created.format("%Y-%m-%d %H:%M:%S"),
            record.filename
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

pub fn ordering_sign(ordering: Ordering) -> i8 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
