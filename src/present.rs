use crate::tally::Tally;
use compact_str::CompactString;
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

const SEPARATOR: &str = "====================";

/// Writes the four result sections to `out` in fixed order: duplicate
/// names, unique names, duplicate honorifics, unique honorifics. Duplicate
/// sections list each key with its count; unique sections list bare keys;
/// an empty section prints its not-found message instead. Entries within a
/// section are not sorted.
pub fn print_report<W: Write>(mut out: W, names: &Tally, honorifics: &Tally) -> io::Result<()> {
    write_counted_section(&mut out, "รายชื่อที่ซ้ำกัน", &names.duplicates, "ไม่พบชื่อซ้ำ")?;
    write_bare_section(
        &mut out,
        "รายชื่อที่ไม่ซ้ำกัน",
        &names.uniques,
        "ไม่พบชื่อที่ไม่ซ้ำ",
    )?;
    write_counted_section(
        &mut out,
        "คำนำหน้าที่ซ้ำกัน",
        &honorifics.duplicates,
        "ไม่พบคำนำหน้าซ้ำ",
    )?;
    write_bare_section(
        &mut out,
        "คำนำหน้าที่ไม่ซ้ำกัน",
        &honorifics.uniques,
        "ไม่พบคำนำหน้าที่ไม่ซ้ำ",
    )?;
    Ok(())
}

fn write_counted_section<W: Write>(
    out: &mut W,
    label: &str,
    entries: &HashMap<CompactString, usize>,
    not_found: &str,
) -> io::Result<()> {
    writeln!(out, "\n{} {} {}", SEPARATOR, label, SEPARATOR)?;
    if entries.is_empty() {
        writeln!(out, "  {}", not_found)?;
    } else {
        for (key, count) in entries {
            writeln!(out, "  {}: {} ครั้ง", key, count)?;
        }
    }
    Ok(())
}

fn write_bare_section<W: Write>(
    out: &mut W,
    label: &str,
    entries: &HashSet<CompactString>,
    not_found: &str,
) -> io::Result<()> {
    writeln!(out, "\n{} {} {}", SEPARATOR, label, SEPARATOR)?;
    if entries.is_empty() {
        writeln!(out, "  {}", not_found)?;
    } else {
        for key in entries {
            writeln!(out, "  {}", key)?;
        }
    }
    Ok(())
}
