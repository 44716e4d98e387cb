//! # Built-in Test Suites / 内置测试套件
//!
//! The suites shipped with the harness: patterned read/write verification
//! against the profile's target device. They use only plain seek/read/write
//! I/O, so an ordinary file works as a stand-in target.
//!
//! harness 自带的测试套件：针对配置目标设备的模式化读写校验。
//! 只使用普通的 seek/读/写 I/O，因此可以用普通文件代替目标设备。

pub mod basic_io;
pub mod integrity;

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};

use crate::core::models::TestFailure;
use crate::core::suite::{TestContext, TestSuite};

pub const BLOCK_SIZE: usize = 4096;

/// Every suite registered with the harness, in a stable order.
pub fn builtin_suites() -> Vec<TestSuite> {
    vec![basic_io::suite(), integrity::suite()]
}

pub(crate) fn open_target(ctx: &TestContext) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(&ctx.device)
        .with_context(|| format!("Failed to open target device: {}", ctx.device.display()))
}

/// One block of deterministic test data; distinct seeds give distinct blocks.
pub(crate) fn pattern_block(seed: u8) -> Vec<u8> {
    (0..BLOCK_SIZE)
        .map(|i| seed.wrapping_add((i % 251) as u8))
        .collect()
}

pub(crate) fn write_at(file: &mut File, offset: u64, data: &[u8]) -> Result<()> {
    file.seek(SeekFrom::Start(offset))?;
    file.write_all(data)
        .with_context(|| format!("Write failed at offset {offset}"))
}

/// Reads back `expected.len()` bytes at `offset` and compares. A mismatch is
/// an assertion-style failure, not an error.
pub(crate) fn verify_at(
    ctx: &TestContext,
    file: &mut File,
    offset: u64,
    expected: &[u8],
) -> Result<()> {
    let mut actual = vec![0u8; expected.len()];
    file.seek(SeekFrom::Start(offset))?;
    file.read_exact(&mut actual)
        .with_context(|| format!("Short read at offset {offset}"))?;
    if actual != expected {
        ctx.error(&format!("data mismatch at offset {offset}"));
        return Err(TestFailure::err(format!(
            "read-back mismatch at offset {offset}"
        )));
    }
    Ok(())
}
