//! Windows known folders
//!
//! Each folder is identified by a GUID fixed by Windows. Resolution goes
//! through `SHGetKnownFolderPath`, either in-process or via a PowerShell
//! subprocess when native access is not wanted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tracing::debug;

use crate::process::{run_with_timeout, split_lines};

/// Known folders used by the providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownFolder {
    Profile,
    RoamingAppData,
    LocalAppData,
    Desktop,
    Documents,
    Downloads,
    Music,
    Pictures,
    Public,
    Templates,
    Videos,
}

impl KnownFolder {
    pub const ALL: [KnownFolder; 11] = [
        KnownFolder::Profile,
        KnownFolder::RoamingAppData,
        KnownFolder::LocalAppData,
        KnownFolder::Desktop,
        KnownFolder::Documents,
        KnownFolder::Downloads,
        KnownFolder::Music,
        KnownFolder::Pictures,
        KnownFolder::Public,
        KnownFolder::Templates,
        KnownFolder::Videos,
    ];

    /// The folder's GUID in registry format, without braces.
    pub fn guid(self) -> &'static str {
        match self {
            KnownFolder::Profile => "5E6C858F-0E22-4760-9AFE-EA3317B67173",
            KnownFolder::RoamingAppData => "3EB685DB-65F9-4CF6-A03A-E3EF65729F3D",
            KnownFolder::LocalAppData => "F1B32785-6FBA-4FCF-9D55-7B8E7F157091",
            KnownFolder::Desktop => "B4BFCC3A-DB2C-424C-B029-7FE99A87C641",
            KnownFolder::Documents => "FDD39AD0-238F-46AF-ADB4-6C85480369C7",
            KnownFolder::Downloads => "374DE290-123F-4565-9164-39C4925E467B",
            KnownFolder::Music => "4BD8D571-6D19-48D3-BE97-422220080E43",
            KnownFolder::Pictures => "33E28130-4E1E-4676-835A-98395C3BC3BB",
            KnownFolder::Public => "DFDF76A2-C82A-4D63-906A-5644AC457385",
            KnownFolder::Templates => "A63293E8-664E-48DB-A079-DF759E0509F7",
            KnownFolder::Videos => "18989B1D-99B5-455B-841C-AB7C74E4DDFC",
        }
    }

    /// Environment variable the location can be derived from, with the
    /// suffix to append to its value (empty when the variable is the folder
    /// itself).
    pub fn env_fallback(self) -> (&'static str, &'static str) {
        match self {
            KnownFolder::Profile => ("USERPROFILE", ""),
            KnownFolder::RoamingAppData => ("APPDATA", ""),
            KnownFolder::LocalAppData => ("LOCALAPPDATA", ""),
            KnownFolder::Public => ("PUBLIC", ""),
            KnownFolder::Desktop => ("USERPROFILE", "\\Desktop"),
            KnownFolder::Documents => ("USERPROFILE", "\\Documents"),
            KnownFolder::Downloads => ("USERPROFILE", "\\Downloads"),
            KnownFolder::Music => ("USERPROFILE", "\\Music"),
            KnownFolder::Pictures => ("USERPROFILE", "\\Pictures"),
            KnownFolder::Videos => ("USERPROFILE", "\\Videos"),
            KnownFolder::Templates => ("APPDATA", "\\Microsoft\\Windows\\Templates"),
        }
    }

    /// The GUID as a 128-bit integer, for native API calls.
    pub fn guid_u128(self) -> u128 {
        let hex: String = self.guid().chars().filter(|c| *c != '-').collect();
        // Table entries are 32 hex digits by construction.
        u128::from_str_radix(&hex, 16).unwrap_or_default()
    }
}

const SCRIPT_PREAMBLE: &str = r#"& {
[Console]::OutputEncoding = [System.Text.Encoding]::UTF8
Add-Type @"
using System;
using System.Runtime.InteropServices;
public class Dir {
  [DllImport("shell32.dll")]
  private static extern int SHGetKnownFolderPath([MarshalAs(UnmanagedType.LPStruct)] Guid rfid, uint dwFlags, IntPtr hToken, out IntPtr pszPath);
  public static string GetKnownFolderPath(string rfid) {
    IntPtr pszPath;
    if (SHGetKnownFolderPath(new Guid(rfid), 0, IntPtr.Zero, out pszPath) != 0) return "";
    string path = Marshal.PtrToStringUni(pszPath);
    Marshal.FreeCoTaskMem(pszPath);
    return path;
  }
}
"@
"#;

const UTF8_BOM: char = '\u{feff}';

/// PowerShell source printing one path per requested folder.
pub fn powershell_script(folders: &[KnownFolder]) -> String {
    let mut script = String::from(SCRIPT_PREAMBLE);
    for folder in folders {
        script.push_str("[Dir]::GetKnownFolderPath(\"");
        script.push_str(folder.guid());
        script.push_str("\")\n");
    }
    script.push('}');
    script
}

/// Base64 of the UTF-16LE script, as `-EncodedCommand` expects.
pub fn encode_command(script: &str) -> String {
    let bytes: Vec<u8> = script.encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect();
    STANDARD.encode(bytes)
}

/// Map script output onto the requested folders, stripping a leading BOM.
pub fn parse_script_output(output: &str, expected: usize) -> Vec<Option<String>> {
    let output = output.strip_prefix(UTF8_BOM).unwrap_or(output);
    split_lines(output, expected)
}

/// Directories that may hold `powershell.exe` or `pwsh.exe`, in search order.
pub fn powershell_search_dirs(path_var: Option<&str>, system_root: Option<&str>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = path_var
        .map(|p| {
            p.split(';')
                .filter(|d| !d.is_empty())
                .map(PathBuf::from)
                .collect()
        })
        .unwrap_or_default();

    let system_root = system_root.filter(|r| !r.is_empty()).unwrap_or("C:\\Windows");
    dirs.push(PathBuf::from(format!(
        "{}\\System32\\WindowsPowerShell\\v1.0\\",
        system_root
    )));

    let program_files = Path::new("C:\\Program Files\\PowerShell");
    if let Ok(entries) = std::fs::read_dir(program_files) {
        let mut versions: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
        versions.sort();
        dirs.extend(versions);
    }
    dirs
}

/// Resolve `folders` through a PowerShell subprocess.
///
/// `powershell.exe` is preferred over `pwsh.exe` in each search directory.
/// Every slot is `None` when no shell can be found or run.
pub fn resolve_with_powershell(
    folders: &[KnownFolder],
    search_dirs: &[PathBuf],
    timeout: Duration,
) -> Vec<Option<String>> {
    if folders.is_empty() {
        return Vec::new();
    }
    let encoded = encode_command(&powershell_script(folders));

    for dir in search_dirs {
        for exe in ["powershell.exe", "pwsh.exe"] {
            let candidate = dir.join(exe);
            if !candidate.is_file() {
                continue;
            }
            let mut cmd = Command::new(&candidate);
            cmd.args(["-NoProfile", "-EncodedCommand", &encoded]);
            match run_with_timeout(cmd, timeout) {
                Some(stdout) => return parse_script_output(&stdout, folders.len()),
                None => debug!("◆ {} produced no usable output", candidate.display()),
            }
        }
    }

    debug!("◆ no PowerShell found for known-folder lookup");
    vec![None; folders.len()]
}

/// Resolve one folder with `SHGetKnownFolderPath`.
#[cfg(windows)]
pub fn resolve_native(folder: KnownFolder) -> Option<String> {
    use windows::core::GUID;
    use windows::Win32::Foundation::HANDLE;
    use windows::Win32::System::Com::CoTaskMemFree;
    use windows::Win32::UI::Shell::{SHGetKnownFolderPath, KF_FLAG_DEFAULT};

    let id = GUID::from_u128(folder.guid_u128());
    // SAFETY: `id` outlives the call and the returned buffer is freed below.
    unsafe {
        let raw = match SHGetKnownFolderPath(&id, KF_FLAG_DEFAULT, HANDLE::default()) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("◆ known folder {} unavailable: {}", folder.guid(), e);
                return None;
            }
        };
        let path = raw.to_string().ok();
        CoTaskMemFree(Some(raw.0 as *const _));
        path.filter(|p| !p.is_empty())
    }
}

/// Native lookups only exist on Windows.
#[cfg(not(windows))]
pub fn resolve_native(_folder: KnownFolder) -> Option<String> {
    None
}
