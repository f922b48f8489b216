//! Bounded helper subprocesses

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run `cmd` and return its stdout.
///
/// Returns `None` when the program cannot be spawned, exits non-zero, or has
/// not finished writing its output after `timeout`. On unix the program runs
/// in its own process group, and a timeout kills the whole group, so
/// anything it started goes down with it.
pub fn run_with_timeout(mut cmd: Command, timeout: Duration) -> Option<String> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            debug!("◆ helper {:?} unavailable: {}", cmd.get_program(), e);
            return None;
        }
    };

    let Some(mut stdout) = child.stdout.take() else {
        terminate(&mut child);
        return None;
    };
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = tx.send(stdout.read_to_end(&mut buf).map(|_| buf));
    });

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                terminate(&mut child);
                debug!(
                    "◆ helper {:?} timed out after {:?}",
                    cmd.get_program(),
                    timeout
                );
                return None;
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                terminate(&mut child);
                debug!("◆ helper {:?} wait failed: {}", cmd.get_program(), e);
                return None;
            }
        }
    };

    // The helper has exited, but something it left behind may still hold
    // stdout open.
    let remaining = deadline.saturating_duration_since(Instant::now());
    let bytes = match rx.recv_timeout(remaining) {
        Ok(Ok(bytes)) => bytes,
        Err(RecvTimeoutError::Timeout) => {
            kill_group(child.id());
            debug!(
                "◆ helper {:?} left its output open past {:?}",
                cmd.get_program(),
                timeout
            );
            return None;
        }
        Ok(Err(_)) | Err(RecvTimeoutError::Disconnected) => {
            debug!("◆ helper {:?} output unreadable", cmd.get_program());
            return None;
        }
    };

    if !status.success() {
        debug!("◆ helper {:?} exited with {}", cmd.get_program(), status);
        return None;
    }

    Some(String::from_utf8_lossy(&bytes).into_owned())
}

fn terminate(child: &mut Child) {
    kill_group(child.id());
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(unix)]
fn kill_group(leader: u32) {
    use nix::errno::Errno;
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    match killpg(Pid::from_raw(leader as i32), Signal::SIGKILL) {
        Ok(()) | Err(Errno::ESRCH) => {}
        Err(e) => debug!("◆ could not kill helper group {}: {}", leader, e),
    }
}

#[cfg(not(unix))]
fn kill_group(_leader: u32) {}

/// Split helper output into exactly `expected` slots, one per line.
///
/// Missing and empty lines become `None`; extra lines are ignored.
pub fn split_lines(output: &str, expected: usize) -> Vec<Option<String>> {
    let mut lines = output.lines();
    (0..expected)
        .map(|_| {
            lines
                .next()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_pads_short_output() {
        assert_eq!(
            split_lines("/a\n/b\n", 3),
            vec![Some("/a".to_string()), Some("/b".to_string()), None]
        );
    }

    #[test]
    fn split_maps_empty_lines_to_none() {
        assert_eq!(
            split_lines("/a\n\n/c", 3),
            vec![Some("/a".to_string()), None, Some("/c".to_string())]
        );
    }

    #[test]
    fn split_ignores_extra_lines_and_crlf() {
        assert_eq!(split_lines("C:\\a\r\nC:\\b\r\n", 1), vec![Some("C:\\a".to_string())]);
        assert_eq!(split_lines("", 2), vec![None, None]);
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let mut cmd = Command::new("/bin/sh");
        cmd.args(["-c", "echo one; echo two"]);
        let out = run_with_timeout(cmd, Duration::from_secs(5)).unwrap();
        assert_eq!(out, "one\ntwo\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_absent() {
        let mut cmd = Command::new("/bin/sh");
        cmd.args(["-c", "echo partial; exit 3"]);
        assert_eq!(run_with_timeout(cmd, Duration::from_secs(5)), None);
    }

    #[test]
    fn missing_program_is_absent() {
        let cmd = Command::new("basedirs-no-such-helper-program");
        assert_eq!(run_with_timeout(cmd, Duration::from_secs(1)), None);
    }

    #[cfg(unix)]
    #[test]
    fn slow_helper_times_out() {
        let mut cmd = Command::new("/bin/sh");
        cmd.args(["-c", "exec sleep 5"]);
        let started = Instant::now();
        assert_eq!(run_with_timeout(cmd, Duration::from_millis(100)), None);
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    /// True while `pid` exists and is not a zombie.
    #[cfg(target_os = "linux")]
    fn is_running(pid: u32) -> bool {
        match std::fs::read_to_string(format!("/proc/{}/stat", pid)) {
            Ok(stat) => stat
                .rsplit(')')
                .next()
                .and_then(|rest| rest.split_whitespace().next())
                .is_some_and(|state| state != "Z" && state != "X"),
            Err(_) => false,
        }
    }

    #[cfg(unix)]
    #[test]
    fn detached_output_holder_does_not_extend_wait() {
        let mut cmd = Command::new("/bin/sh");
        cmd.args(["-c", "(sleep 4 &); echo /detached"]);
        let started = Instant::now();
        assert_eq!(run_with_timeout(cmd, Duration::from_millis(200)), None);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn timeout_kills_grandchildren() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("helper.pid");
        let mut cmd = Command::new("/bin/sh");
        cmd.arg("-c").arg(format!(
            "sleep 37 & echo $! > '{}'; wait",
            pid_file.display()
        ));
        assert_eq!(run_with_timeout(cmd, Duration::from_millis(300)), None);

        let pid: u32 = std::fs::read_to_string(&pid_file)
            .unwrap()
            .trim()
            .parse()
            .unwrap();
        let gone_by = Instant::now() + Duration::from_secs(2);
        while is_running(pid) && Instant::now() < gone_by {
            thread::sleep(POLL_INTERVAL);
        }
        assert!(!is_running(pid), "helper child {} outlived the timeout", pid);
    }
}
