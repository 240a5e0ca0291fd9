#![no_main]
use libfuzzer_sys::fuzz_target;

use elfview::elf::headers;
use elfview::{ByteView, StringTable};

fuzz_target!(|data: &[u8]| {
    let view = ByteView::new(data);
    let _ = headers::parse_identification(view);
    let _ = headers::parse_file_header(view);
    let _ = headers::parse_program_header(view, 0, 56);
    let _ = headers::parse_section_header(view, 0, 64);

    let table = StringTable::new(view);
    let _ = table.get(0);
    let _ = table.get(data.len() / 2);
});
