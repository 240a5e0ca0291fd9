use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use elfview::{ByteView, Elf64File};

fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// A small well-formed object: one segment, null + .text + .shstrtab.
fn sample_object() -> Vec<u8> {
    let mut buf = vec![0u8; 0x170];

    put(&mut buf, 0, b"\x7fELF");
    buf[4] = 2;
    buf[5] = 1;
    buf[6] = 1;
    put(&mut buf, 16, &2u16.to_le_bytes());
    put(&mut buf, 18, &62u16.to_le_bytes());
    put(&mut buf, 20, &1u32.to_le_bytes());
    put(&mut buf, 24, &0x401000u64.to_le_bytes());
    put(&mut buf, 32, &0x40u64.to_le_bytes());
    put(&mut buf, 40, &0x78u64.to_le_bytes());
    put(&mut buf, 52, &64u16.to_le_bytes());
    put(&mut buf, 54, &56u16.to_le_bytes());
    put(&mut buf, 56, &1u16.to_le_bytes());
    put(&mut buf, 58, &64u16.to_le_bytes());
    put(&mut buf, 60, &3u16.to_le_bytes());
    put(&mut buf, 62, &2u16.to_le_bytes());

    put(&mut buf, 0x40, &1u32.to_le_bytes());
    put(&mut buf, 0x44, &5u32.to_le_bytes());
    put(&mut buf, 0x48, &0x140u64.to_le_bytes());
    put(&mut buf, 0x50, &0x401000u64.to_le_bytes());
    put(&mut buf, 0x58, &0x401000u64.to_le_bytes());
    put(&mut buf, 0x60, &0x10u64.to_le_bytes());
    put(&mut buf, 0x68, &0x10u64.to_le_bytes());
    put(&mut buf, 0x70, &0x1000u64.to_le_bytes());

    put(&mut buf, 0xB8, &1u32.to_le_bytes());
    put(&mut buf, 0xBC, &1u32.to_le_bytes());
    put(&mut buf, 0xC0, &6u64.to_le_bytes());
    put(&mut buf, 0xC8, &0x401000u64.to_le_bytes());
    put(&mut buf, 0xD0, &0x140u64.to_le_bytes());
    put(&mut buf, 0xD8, &0x10u64.to_le_bytes());

    put(&mut buf, 0xF8, &7u32.to_le_bytes());
    put(&mut buf, 0xFC, &3u32.to_le_bytes());
    put(&mut buf, 0x110, &0x150u64.to_le_bytes());
    put(&mut buf, 0x118, &17u64.to_le_bytes());

    put(&mut buf, 0x140, &[0x90u8; 0x10]);
    put(&mut buf, 0x150, b"\0.text\0.shstrtab\0");

    buf
}

fn bench_navigate(c: &mut Criterion) {
    let image = sample_object();
    let mut group = c.benchmark_group("navigate");
    group.throughput(Throughput::Bytes(image.len() as u64));

    group.bench_function("header", |b| {
        let file = Elf64File::new(ByteView::new(&image));
        b.iter(|| file.header().unwrap())
    });

    group.bench_function("section-by-name", |b| {
        let file = Elf64File::new(ByteView::new(&image));
        b.iter(|| file.section_by_name(".text").unwrap().data.len())
    });

    group.bench_function("walk-sections", |b| {
        let file = Elf64File::new(ByteView::new(&image));
        b.iter(|| {
            file.sections()
                .unwrap()
                .map(|section| section.unwrap().data.len())
                .sum::<usize>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_navigate);
criterion_main!(benches);
