//! Exit handling: signal handlers, terminal cleanup, and graceful shutdown.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the form owns the alternate screen.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_screen_active(active: bool) {
    SCREEN_ACTIVE.store(active, Ordering::SeqCst);
}

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Leave the alternate screen and show the cursor if the form was up.
/// Only uses async-signal-safe calls.
fn restore_screen() {
    if !SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h\x1b[?1049l";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// Cleanup function registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    restore_screen();
    reset_terminal_termios();
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Crash handler for SIGSEGV/SIGABRT - restore the terminal, then re-raise for core dump
extern "C" fn crash_handler(sig: libc::c_int) {
    restore_screen();
    reset_terminal_termios();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Check if a file descriptor is a terminal.
pub fn is_tty(fd: libc::c_int) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}
