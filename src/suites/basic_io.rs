//! Basic read/write verification against the target device.

use anyhow::{Context, Result};

use crate::core::suite::{TestContext, TestSuite};
use crate::suites::{BLOCK_SIZE, open_target, pattern_block, verify_at, write_at};

pub fn suite() -> TestSuite {
    TestSuite::new("basic_io")
        .case("sequential_write_read", sequential_write_read)
        .case("scattered_offsets", scattered_offsets)
        .case("rewrite_stability", rewrite_stability)
}

fn sequential_write_read(ctx: &mut TestContext) -> Result<()> {
    let mut file = open_target(ctx)?;
    ctx.info(&format!("writing 8 blocks of {BLOCK_SIZE} bytes sequentially"));
    for i in 0..8u8 {
        write_at(&mut file, u64::from(i) * BLOCK_SIZE as u64, &pattern_block(i))?;
    }
    file.sync_all().context("sync failed")?;
    for i in 0..8u8 {
        verify_at(ctx, &mut file, u64::from(i) * BLOCK_SIZE as u64, &pattern_block(i))?;
    }
    ctx.info("sequential read-back verified");
    Ok(())
}

fn scattered_offsets(ctx: &mut TestContext) -> Result<()> {
    let mut file = open_target(ctx)?;
    // Fixed scatter keeps reruns comparable.
    let offsets = [0u64, 3, 11, 26].map(|block| block * BLOCK_SIZE as u64);
    for (i, offset) in offsets.iter().enumerate() {
        ctx.debug(&format!("writing block at offset {offset}"));
        write_at(&mut file, *offset, &pattern_block(0x40 + i as u8))?;
    }
    file.sync_all().context("sync failed")?;
    for (i, offset) in offsets.iter().enumerate() {
        verify_at(ctx, &mut file, *offset, &pattern_block(0x40 + i as u8))?;
    }
    Ok(())
}

fn rewrite_stability(ctx: &mut TestContext) -> Result<()> {
    let mut file = open_target(ctx)?;
    for pass in 0..3u8 {
        ctx.info(&format!("rewrite pass {pass}"));
        write_at(&mut file, 0, &pattern_block(0x80 + pass))?;
        file.sync_all().context("sync failed")?;
    }
    // The last pattern written must win.
    verify_at(ctx, &mut file, 0, &pattern_block(0x82))
}
