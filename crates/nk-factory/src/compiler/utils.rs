use anyhow::{bail, Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};

pub const STATUS_SUCCESS: &str = "SUCCESS";
pub const STATUS_FAILED: &str = "FAILED";

/// Removes the intermediate artifacts the compiler leaves next to the
/// script: `build/`, any `*.build` directory, and `__pycache__`.
pub fn cleanup_artifacts(dir: &Path) {
    let build_dir = dir.join("build");
    if build_dir.is_dir() {
        let _ = fs::remove_dir_all(&build_dir);
    }
    let pycache = dir.join("__pycache__");
    if pycache.is_dir() {
        let _ = fs::remove_dir_all(&pycache);
    }
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            let is_build_dir = path.is_dir()
                && path
                    .extension()
                    .map(|ext| ext == "build")
                    .unwrap_or(false);
            if is_build_dir {
                let _ = fs::remove_dir_all(&path);
            }
        }
    }
}

/// Opens the folder containing the compiled executable in the system
/// file manager.
pub fn open_output_folder(dir: &Path) -> Result<()> {
    if !dir.exists() {
        bail!("Output folder not found at {:?}", dir);
    }
    #[cfg(target_os = "windows")]
    let launcher = "explorer";
    #[cfg(target_os = "macos")]
    let launcher = "open";
    #[cfg(all(unix, not(target_os = "macos")))]
    let launcher = "xdg-open";

    Command::new(launcher)
        .arg(dir)
        .spawn()
        .context("Failed to open file manager")?;
    Ok(())
}

fn status_file_path() -> PathBuf {
    env::temp_dir().join("nuitka_forge_status.txt")
}

/// Hands the compile command to a freshly spawned terminal window. The
/// window writes a one-line SUCCESS/FAILED token to a status file in the
/// temp directory when the command finishes; callers poll that file with
/// [`poll_status_file`]. Exists because some platforms cannot stream
/// output from a fully detached console back into the app.
pub fn spawn_detached(
    command: &str,
    cwd: Option<&Path>,
    venv_root: Option<&Path>,
) -> Result<PathBuf> {
    let status_file = status_file_path();
    if status_file.exists() {
        let _ = fs::remove_file(&status_file);
    }

    #[cfg(windows)]
    {
        let batch_file = env::temp_dir().join("nuitka_forge_compile.bat");
        let mut script = String::from("@echo off\r\n");
        if let Some(root) = venv_root {
            script.push_str("echo Activating virtual environment...\r\n");
            script.push_str(&format!("cd /d \"{}\\Scripts\"\r\n", root.display()));
            script.push_str("call activate\r\n");
        }
        if let Some(dir) = cwd {
            script.push_str(&format!("cd /d \"{}\"\r\n", dir.display()));
        }
        script.push_str("echo Running Nuitka compilation...\r\n");
        script.push_str(command);
        script.push_str("\r\n");
        script.push_str("if %ERRORLEVEL% EQU 0 (\r\n");
        script.push_str("    echo Compilation successful!\r\n");
        script.push_str(&format!(
            "    echo {} > \"{}\"\r\n",
            STATUS_SUCCESS,
            status_file.display()
        ));
        script.push_str("    timeout /t 2 >nul\r\n");
        script.push_str("    exit\r\n");
        script.push_str(") else (\r\n");
        script.push_str("    echo Compilation failed!\r\n");
        script.push_str(&format!(
            "    echo {} > \"{}\"\r\n",
            STATUS_FAILED,
            status_file.display()
        ));
        script.push_str("    pause\r\n");
        script.push_str(")\r\n");

        fs::write(&batch_file, script).context("Failed to write compile script")?;
        Command::new("cmd")
            .args(["/C", "start", "cmd", "/C"])
            .arg(&batch_file)
            .spawn()
            .context("Failed to open terminal window")?;
    }

    #[cfg(not(windows))]
    {
        // The venv interpreter path is baked into the command itself on
        // Unix; no activation preamble is needed.
        let _ = venv_root;
        let move_to = cwd
            .map(|dir| format!("cd '{}'; ", dir.display()))
            .unwrap_or_default();
        let inner = format!(
            "{}{}; if [ $? -eq 0 ]; then \
             echo {} > '{}'; echo 'Compilation successful!'; sleep 2; \
             else echo {} > '{}'; echo 'Compilation failed!'; \
             read -p 'Press Enter to close...'; fi",
            move_to,
            command,
            STATUS_SUCCESS,
            status_file.display(),
            STATUS_FAILED,
            status_file.display()
        );
        Command::new("gnome-terminal")
            .arg("--")
            .arg("bash")
            .arg("-c")
            .arg(&inner)
            .spawn()
            .context("Failed to open terminal window")?;
    }

    Ok(status_file)
}

/// Checks the detached-run status file. Returns the run's outcome once
/// the token is present, deleting the file on consumption.
pub fn poll_status_file(path: &Path) -> Option<bool> {
    let content = fs::read_to_string(path).ok()?;
    let result = match content.trim() {
        STATUS_SUCCESS => true,
        STATUS_FAILED => false,
        _ => return None,
    };
    let _ = fs::remove_file(path);
    Some(result)
}
