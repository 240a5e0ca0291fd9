#![no_main]
use libfuzzer_sys::fuzz_target;

use elfview::{ByteView, Elf64File};

fuzz_target!(|data: &[u8]| {
    let file = Elf64File::new(ByteView::new(data));
    let _ = file.identification();
    let _ = file.header();
    let _ = file.program(0);
    let _ = file.section_by_index(0);
    let _ = file.section_by_name(".text");
    if let Ok(sections) = file.sections() {
        for section in sections {
            let _ = section;
        }
    }
    if let Ok(programs) = file.programs() {
        for program in programs {
            let _ = program;
        }
    }
});
