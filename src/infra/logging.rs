//! # Log Routing Module / 日志路由模块
//!
//! Test bodies log through a shared router whose current sink the
//! orchestrator swaps per test, so each test's output lands in its own
//! file without any process-global state. The run is single-threaded with
//! no concurrent callback delivery, so a plain `Rc<RefCell<_>>` handle is
//! enough; there is nothing to lock.
//!
//! 测试体通过一个共享路由器写日志，协调器按测试切换其当前输出，
//! 使每个测试的输出落在各自的文件中，无需任何进程级全局状态。
//! 运行是单线程的，回调不会并发送达，因此一个普通的
//! `Rc<RefCell<_>>` 句柄就足够了，无需加锁。

use chrono::Local;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::core::logparse::MessageLevel;

/// Shared, single-threaded handle to the router.
pub type LogHandle = Rc<RefCell<LogRouter>>;

/// Creates a router handle with the default sink (stderr).
pub fn new_handle() -> LogHandle {
    Rc::new(RefCell::new(LogRouter::new()))
}

/// The logging subsystem's current output sink.
pub struct LogRouter {
    sink: Box<dyn Write>,
    redirected: bool,
}

impl LogRouter {
    pub fn new() -> Self {
        Self {
            sink: Box::new(io::stderr()),
            redirected: false,
        }
    }

    /// Swaps in a per-test sink, returning the previous one so the caller
    /// can put it back when the test completes.
    pub fn redirect(&mut self, sink: Box<dyn Write>) -> Box<dyn Write> {
        self.redirected = true;
        std::mem::replace(&mut self.sink, sink)
    }

    /// Puts a previously active sink back, returning the per-test sink so
    /// the caller can flush and close it.
    pub fn restore(&mut self, previous: Box<dyn Write>) -> Box<dyn Write> {
        self.redirected = false;
        std::mem::replace(&mut self.sink, previous)
    }

    pub fn is_redirected(&self) -> bool {
        self.redirected
    }

    /// Writes one header-formatted message: level letter, comma, bracketed
    /// ISO-8601 timestamp with microseconds plus the process id, colon, body.
    /// Continuation lines come from embedded newlines in `text`.
    pub fn write_message(&mut self, level: MessageLevel, text: &str) -> io::Result<()> {
        let stamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f");
        writeln!(
            self.sink,
            "{}, [{} #{}]: {}",
            level.letter(),
            stamp,
            std::process::id(),
            text
        )?;
        self.sink.flush()
    }
}

impl Default for LogRouter {
    fn default() -> Self {
        Self::new()
    }
}
