//! Writes that cross block boundaries or land at high offsets.

use anyhow::{Context, Result};

use crate::core::suite::{TestContext, TestSuite};
use crate::suites::{BLOCK_SIZE, open_target, pattern_block, verify_at, write_at};

pub fn suite() -> TestSuite {
    TestSuite::new("integrity")
        .case("boundary_straddle", boundary_straddle)
        .case("high_offset_roundtrip", high_offset_roundtrip)
}

fn boundary_straddle(ctx: &mut TestContext) -> Result<()> {
    let mut file = open_target(ctx)?;
    // 4 KiB write centered on the first block boundary.
    let offset = BLOCK_SIZE as u64 - (BLOCK_SIZE as u64 / 2);
    ctx.info(&format!("straddling block boundary at offset {offset}"));
    write_at(&mut file, offset, &pattern_block(0x11))?;
    file.sync_all().context("sync failed")?;
    verify_at(ctx, &mut file, offset, &pattern_block(0x11))
}

fn high_offset_roundtrip(ctx: &mut TestContext) -> Result<()> {
    let mut file = open_target(ctx)?;
    let offset = 4 * 1024 * 1024;
    ctx.info(&format!("write/read round-trip at offset {offset}"));
    write_at(&mut file, offset, &pattern_block(0x22))?;
    file.sync_all().context("sync failed")?;
    verify_at(ctx, &mut file, offset, &pattern_block(0x22))
}
