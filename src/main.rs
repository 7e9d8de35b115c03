use log::info;
use name_tally::{collect_names, detect_duplicate_honorifics, find_duplicate_names, print_report};
use std::io::{self, Write};

const TITLE: &str = "โปรแกรมค้นหารายชื่อและคำนำหน้าที่ซ้ำและไม่ซ้ำ";
const INSTRUCTIONS: &str =
    "ใส่ชื่อทีละชื่อ กด Enter หลังใส่ชื่อ พิมพ์ 'done' เมื่อต้องการสิ้นสุดการป้อนชื่อ";

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", TITLE).ok();
    writeln!(out, "{}", INSTRUCTIONS).ok();

    let names = collect_names(stdin.lock(), &mut out);
    info!("collected {} names", names.len());

    let name_tally = find_duplicate_names(&names);
    let honorific_tally = detect_duplicate_honorifics(&names);

    print_report(&mut out, &name_tally, &honorific_tally).ok();
}
