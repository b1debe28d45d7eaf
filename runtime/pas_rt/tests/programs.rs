//! End-to-end checks shaped like translated Pascal programs.
//!
//! Each test strings together the calls generated code would make, so a
//! regression in one layer shows up as the program misbehaving.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pas_rt::control::pfor;
use pas_rt::convert::{int_to_hex, int_to_str, str_to_int, val_int};
use pas_rt::io::{io_result, BinaryFile, IoCode, TextFile};
use pas_rt::{
    format, Byte, FormatArg, Int64, Integer, MemoryArena, PasSet, PasString, SmallInt,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn s(text: &str) -> PasString {
    PasString::from(text)
}

#[test]
fn missing_file_sets_io_result_once() {
    let dir = TempDir::new().unwrap();
    let mut f = TextFile::new();
    f.assign(dir.path().join("missing.txt").to_string_lossy().as_ref());
    f.reset();
    assert_eq!(io_result(), IoCode::FileNotFound.code());
    assert_eq!(io_result(), 0);
}

#[test]
fn squares_table_round_trip() {
    // var f: TextFile; i: Integer;
    // Rewrite(f); for i := 1 to 5 do WriteLn(f, Format('%3d %5d', [i, i*i]));
    let dir = TempDir::new().unwrap();
    let mut f = TextFile::new();
    f.assign(dir.path().join("squares.txt").to_string_lossy().as_ref());
    f.rewrite();
    pfor(Integer::new(1), Integer::new(5), |i| {
        let args = [FormatArg::from(i), FormatArg::from(i * i)];
        let line = format(&s("%3d %5d"), &args).unwrap();
        f.write_ln(&line);
    });
    f.close();
    assert_eq!(io_result(), 0);

    // Reset(f); while not Eof(f) do begin Read(f, a, b); Inc(total, b) end;
    f.reset();
    let mut total = Integer::ZERO;
    let mut lines = 0;
    while !f.seek_eof() {
        let n: Integer = f.read().unwrap();
        let square: Integer = f.read().unwrap();
        assert_eq!(square, n * n);
        total += square;
        lines += 1;
        f.read_ln();
    }
    f.close();
    assert_eq!(lines, 5);
    assert_eq!(total, Integer::new(55));
}

#[test]
fn hex_dump_of_negative_values() {
    assert_eq!(int_to_hex(Integer::new(-1), 0), "FFFFFFFF");
    assert_eq!(int_to_hex(SmallInt::new(-1), 0), "FFFF");
    assert_eq!(int_to_hex(Int64::new(-1), 0), "FFFFFFFFFFFFFFFF");
    assert_eq!(int_to_hex(Byte::new(10), 4), "000A");
}

#[test]
fn parse_and_report() {
    let (value, code) = val_int(&s("12x"));
    assert_eq!((value, code), (Integer::ZERO, Integer::new(3)));
    assert_eq!(str_to_int(&s("  42 ")).unwrap(), Integer::new(42));

    let err = str_to_int(&s("abc")).unwrap_err();
    assert_eq!(pas_rt::exception_message(), *err.message());
    assert_eq!(int_to_str(Integer::new(-7)), "-7");
}

#[test]
fn records_through_a_typed_file() {
    // var f: file of Integer; Rewrite(f); Write(f, ...); Seek(f, 2); Read(f, x)
    let dir = TempDir::new().unwrap();
    let mut f = BinaryFile::new();
    f.assign(dir.path().join("nums.dat").to_string_lossy().as_ref());
    f.rewrite_with_record_size(4);
    for n in [10, 20, 30, 40] {
        f.write(&Integer::new(n));
    }
    f.seek(2);
    assert_eq!(f.read::<Integer>(), Some(Integer::new(30)));
    assert_eq!(f.file_pos(), Int64::new(3));
    assert_eq!(f.file_size(), Int64::new(4));
    f.close();
}

#[test]
fn sieve_with_a_set() {
    let mut primes: PasSet = PasSet::from_range(2, 50);
    pfor(Integer::new(2), Integer::new(7), |i| {
        let mut multiple = i * i;
        while multiple <= Integer::new(50) {
            primes.exclude(multiple);
            multiple += i;
        }
    });
    let found: Vec<u8> = primes.iter().collect();
    assert_eq!(found, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]);
}

#[test]
fn buffer_copy_through_the_arena() {
    let mut heap = MemoryArena::new();
    let mut src = heap.get_mem(8).unwrap();
    let mut dst = heap.alloc_mem(8).unwrap();
    heap.fill_char(src, 8, b'z').unwrap();
    heap.move_mem(src, dst, 8).unwrap();
    assert_eq!(heap.compare_mem(src, dst, 8).unwrap(), Integer::ZERO);
    heap.free_mem(&mut src).unwrap();
    heap.free_mem(&mut dst).unwrap();
    assert_eq!(heap.live_blocks(), 0);
}
