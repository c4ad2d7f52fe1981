use std::panic;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Logging setup chosen by the binary, typically from its CLI.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Directory for daily-rotated log files; stdout when unset.
    pub dir: Option<PathBuf>,
    /// Also run the default panic hook, which prints the backtrace.
    pub backtrace_on_panic: bool,
}

/// Install a global panic hook that reports panics as `tracing` error
/// events (application, panic site, message). Installed once per process;
/// later calls are no-ops.
pub fn install_tracing_panic_hook(app_name: &'static str, backtrace_on_panic: bool) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();

        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()));
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic payload not string".into());

            tracing::error!(
                application = app_name,
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic captured"
            );

            if backtrace_on_panic {
                default_hook(info);
            }
        }));
    });
}

fn rotating_file_writer(app_name: &'static str, dir: &Path) -> Option<BoxMakeWriter> {
    if let Err(err) = std::fs::create_dir_all(dir) {
        tracing::warn!(error = %err, "failed to create log directory; falling back to stdout");
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(non_blocking))
}

/// Initialize the tracing subscriber. With `options.dir` set, logs go to
/// `<dir>/<app>.log` with daily rotation, otherwise to stdout. `RUST_LOG`
/// controls filtering when present.
pub fn init_tracing_subscriber(app_name: &'static str, options: &LogOptions) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    let writer = options
        .dir
        .as_deref()
        .and_then(|dir| rotating_file_writer(app_name, dir));

    if let Some(writer) = writer {
        let _ = builder.with_writer(writer).try_init();
    } else {
        let _ = builder.try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_writer_creates_the_log_directory() {
        let dir = std::env::temp_dir().join(format!("dm-logging-test-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let writer = rotating_file_writer("dm-test", &dir);
        assert!(writer.is_some());
        assert!(dir.is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn panic_hook_installs_once() {
        install_tracing_panic_hook("dm-test", false);
        // Second call must be a no-op, not a re-wrap of the hook.
        install_tracing_panic_hook("dm-test", true);
    }

    #[test]
    fn default_options_log_to_stdout() {
        let options = LogOptions::default();
        assert!(options.dir.is_none());
        assert!(!options.backtrace_on_panic);
    }
}
