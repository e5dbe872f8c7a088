use std::path::{Path, PathBuf};

/// Compiler backend and compatibility toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationOptions {
    pub clang: bool,
    pub mingw64: bool,
    pub disable_console_ctrl_handler: bool,
    pub full_compat: bool,
    pub static_libpython: bool,
}

/// Module discovery and embedding toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleOptions {
    pub follow_stdlib: bool,
    pub prefer_source: bool,
    pub include_package_data: bool,
    pub python_flag_nosite: bool,
    pub remove_embedded: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceOptions {
    pub disable_ccache: bool,
    pub high_memory: bool,
    pub linux_onefile_icon: bool,
    pub macos_create_app_bundle: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugOptions {
    pub debug: bool,
    pub unstriped: bool,
    pub trace_execution: bool,
    pub disable_dll_dependency_cache: bool,
    pub experimental: bool,
    pub show_memory: bool,
    pub show_progress: bool,
    pub verbose: bool,
}

/// One full snapshot of everything the user configured for a build.
///
/// Every field exists with a default, so callers never probe for presence.
/// The snapshot is read once per compile/preview action and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Target script. May be empty; front-ends block actions until it is set.
    pub script: PathBuf,

    pub standalone: bool,
    pub onefile: bool,
    pub remove_output: bool,
    pub no_console: bool,
    pub follow_imports: bool,
    pub lto: bool,
    pub tkinter_plugin: bool,
    pub pyqt6_plugin: bool,

    /// Parallel C compile jobs, 1..=16.
    pub jobs: u8,
    /// Python-level optimization, 0..=3. Folded into the interpreter
    /// invocation, not passed to the compiler itself.
    pub opt_level: u8,

    pub venv_root: Option<PathBuf>,
    pub icon: Option<PathBuf>,
    /// Extra files embedded next to the executable, deduplicated by source
    /// path. Basename collisions are the user's problem, not ours.
    pub resources: Vec<PathBuf>,

    pub compilation: CompilationOptions,
    pub module: ModuleOptions,
    pub perf: PerformanceOptions,
    pub debug: DebugOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            script: PathBuf::new(),
            standalone: false,
            onefile: false,
            remove_output: false,
            no_console: false,
            follow_imports: false,
            lto: false,
            tkinter_plugin: false,
            pyqt6_plugin: false,
            jobs: 1,
            opt_level: 2,
            venv_root: None,
            icon: None,
            resources: Vec::new(),
            compilation: CompilationOptions::default(),
            module: ModuleOptions::default(),
            perf: PerformanceOptions::default(),
            debug: DebugOptions::default(),
        }
    }
}

impl BuildOptions {
    /// One-file builds always imply a standalone distribution.
    pub fn effective_standalone(&self) -> bool {
        self.standalone || self.onefile
    }

    /// Registers a file for embedding. The first `.ico` becomes the icon
    /// when none is set; everything else lands in the resource list,
    /// deduplicated by source path.
    pub fn add_resource(&mut self, path: PathBuf) {
        let is_ico = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("ico"))
            .unwrap_or(false);
        if is_ico && self.icon.is_none() {
            self.icon = Some(path);
            return;
        }
        if !self.resources.contains(&path) {
            self.resources.push(path);
        }
    }

    pub fn remove_resource(&mut self, index: usize) {
        if index < self.resources.len() {
            self.resources.remove(index);
        }
    }

    /// Folder the script lives in. Doubles as the compiler's output and
    /// working directory.
    pub fn script_dir(&self) -> Option<&Path> {
        self.script.parent().filter(|dir| !dir.as_os_str().is_empty())
    }

    /// Interpreter this snapshot would invoke: the venv interpreter when a
    /// root is selected, the bare system interpreter otherwise.
    pub fn interpreter(&self) -> PathBuf {
        match &self.venv_root {
            Some(root) => venv_python(root),
            None => PathBuf::from(crate::flags::SYSTEM_PYTHON),
        }
    }
}

/// Interpreter location inside a virtual environment root, following the
/// platform's venv layout convention. Pure path math, no filesystem access.
pub fn venv_python(root: &Path) -> PathBuf {
    if cfg!(windows) {
        root.join("Scripts").join("python.exe")
    } else {
        root.join("bin").join("python")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onefile_implies_standalone() {
        let mut options = BuildOptions::default();
        options.onefile = true;
        assert!(options.effective_standalone());
        assert!(!options.standalone);
    }

    #[test]
    fn first_ico_becomes_icon() {
        let mut options = BuildOptions::default();
        options.add_resource(PathBuf::from("/assets/app.ico"));
        options.add_resource(PathBuf::from("/assets/alt.ico"));
        assert_eq!(options.icon, Some(PathBuf::from("/assets/app.ico")));
        assert_eq!(options.resources, vec![PathBuf::from("/assets/alt.ico")]);
    }

    #[test]
    fn resources_deduplicate_by_source_path() {
        let mut options = BuildOptions::default();
        options.add_resource(PathBuf::from("/data/readme.txt"));
        options.add_resource(PathBuf::from("/data/readme.txt"));
        options.add_resource(PathBuf::from("/other/readme.txt"));
        assert_eq!(options.resources.len(), 2);
    }

    #[test]
    fn script_dir_empty_for_bare_name() {
        let mut options = BuildOptions::default();
        options.script = PathBuf::from("app.py");
        assert_eq!(options.script_dir(), None);
        options.script = PathBuf::from("/tmp/app.py");
        assert_eq!(options.script_dir(), Some(Path::new("/tmp")));
    }

    #[test]
    fn interpreter_defaults_to_system_python() {
        let options = BuildOptions::default();
        assert_eq!(options.interpreter(), PathBuf::from("python"));
    }

    #[cfg(unix)]
    #[test]
    fn venv_interpreter_uses_bin_layout() {
        assert_eq!(
            venv_python(Path::new("/envs/demo")),
            PathBuf::from("/envs/demo/bin/python")
        );
    }
}
