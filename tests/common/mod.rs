//! Common test utilities and helpers.
//!
//! Builds the synthetic ELF64 object the integration tests navigate, and
//! writes fixtures out to temporary files for the mapping layer.

use std::io::Write;

use tempfile::NamedTempFile;

/// Copy `bytes` into `buf` starting at `offset`.
pub fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// Write `content` to a fresh temporary file and return its handle.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Bytes the sample object stores in its `.text` section.
pub fn text_content() -> Vec<u8> {
    vec![0x90u8; 0x20]
}

/// Bytes the sample object stores in its `.data` section.
pub fn data_content() -> Vec<u8> {
    (0u8..0x10).collect()
}

/// A complete little-endian ELF64 executable image:
///
/// * file header at 0, program header table at 0x40 (2 entries),
///   section header table at 0x100 (4 entries, name table index 3)
/// * sections: null, `.text` (0x20 bytes at 0x240), `.data` (0x10 bytes
///   at 0x260), `.shstrtab` (23 bytes at 0x200)
/// * segments: one covering the file image up to 0x270, one covering
///   the `.data` bytes with a larger in-memory size
pub fn sample_object() -> Vec<u8> {
    let mut buf = vec![0u8; 0x400];

    // File header.
    put(&mut buf, 0, b"\x7fELF");
    buf[4] = 2; // 64-bit
    buf[5] = 1; // little-endian
    buf[6] = 1; // identification version
    put(&mut buf, 16, &2u16.to_le_bytes()); // object_type
    put(&mut buf, 18, &62u16.to_le_bytes()); // architecture
    put(&mut buf, 20, &1u32.to_le_bytes()); // object_version
    put(&mut buf, 24, &0x401000u64.to_le_bytes()); // entry_address
    put(&mut buf, 32, &0x40u64.to_le_bytes()); // program_header_offset
    put(&mut buf, 40, &0x100u64.to_le_bytes()); // section_header_offset
    put(&mut buf, 52, &64u16.to_le_bytes()); // elf_header_size
    put(&mut buf, 54, &56u16.to_le_bytes()); // program_header_size
    put(&mut buf, 56, &2u16.to_le_bytes()); // program_header_count
    put(&mut buf, 58, &64u16.to_le_bytes()); // section_header_size
    put(&mut buf, 60, &4u16.to_le_bytes()); // section_header_count
    put(&mut buf, 62, &3u16.to_le_bytes()); // section_header_index

    // Program header 0: read-only image covering everything up to .data.
    put(&mut buf, 0x40, &1u32.to_le_bytes()); // segment_type
    put(&mut buf, 0x44, &4u32.to_le_bytes()); // flags
    put(&mut buf, 0x48, &0u64.to_le_bytes()); // file_offset
    put(&mut buf, 0x50, &0x400000u64.to_le_bytes()); // virtual_address
    put(&mut buf, 0x58, &0x400000u64.to_le_bytes()); // physical_address
    put(&mut buf, 0x60, &0x270u64.to_le_bytes()); // size_in_file
    put(&mut buf, 0x68, &0x270u64.to_le_bytes()); // size_in_memory
    put(&mut buf, 0x70, &0x1000u64.to_le_bytes()); // alignment

    // Program header 1: writable data, larger in memory than on disk.
    put(&mut buf, 0x78, &1u32.to_le_bytes()); // segment_type
    put(&mut buf, 0x7C, &6u32.to_le_bytes()); // flags
    put(&mut buf, 0x80, &0x260u64.to_le_bytes()); // file_offset
    put(&mut buf, 0x88, &0x402000u64.to_le_bytes()); // virtual_address
    put(&mut buf, 0x90, &0x402000u64.to_le_bytes()); // physical_address
    put(&mut buf, 0x98, &0x10u64.to_le_bytes()); // size_in_file
    put(&mut buf, 0xA0, &0x30u64.to_le_bytes()); // size_in_memory
    put(&mut buf, 0xA8, &0x1000u64.to_le_bytes()); // alignment

    // Section 0 (0x100) stays all zero.

    // Section 1 (0x140): .text
    put(&mut buf, 0x140, &1u32.to_le_bytes()); // name_offset
    put(&mut buf, 0x144, &1u32.to_le_bytes()); // section_type
    put(&mut buf, 0x148, &6u64.to_le_bytes()); // flags
    put(&mut buf, 0x150, &0x401000u64.to_le_bytes()); // virtual_address
    put(&mut buf, 0x158, &0x240u64.to_le_bytes()); // file_offset
    put(&mut buf, 0x160, &0x20u64.to_le_bytes()); // size
    put(&mut buf, 0x170, &16u64.to_le_bytes()); // alignment

    // Section 2 (0x180): .data
    put(&mut buf, 0x180, &7u32.to_le_bytes()); // name_offset
    put(&mut buf, 0x184, &1u32.to_le_bytes()); // section_type
    put(&mut buf, 0x188, &3u64.to_le_bytes()); // flags
    put(&mut buf, 0x190, &0x402000u64.to_le_bytes()); // virtual_address
    put(&mut buf, 0x198, &0x260u64.to_le_bytes()); // file_offset
    put(&mut buf, 0x1A0, &0x10u64.to_le_bytes()); // size
    put(&mut buf, 0x1B0, &8u64.to_le_bytes()); // alignment

    // Section 3 (0x1C0): .shstrtab
    put(&mut buf, 0x1C0, &13u32.to_le_bytes()); // name_offset
    put(&mut buf, 0x1C4, &3u32.to_le_bytes()); // section_type
    put(&mut buf, 0x1D8, &0x200u64.to_le_bytes()); // file_offset
    put(&mut buf, 0x1E0, &23u64.to_le_bytes()); // size
    put(&mut buf, 0x1F0, &1u64.to_le_bytes()); // alignment

    // Content.
    put(&mut buf, 0x200, b"\0.text\0.data\0.shstrtab\0");
    put(&mut buf, 0x240, &text_content());
    put(&mut buf, 0x260, &data_content());

    buf
}
