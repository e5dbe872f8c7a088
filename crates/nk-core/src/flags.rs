//! Nuitka flag name constants
//!
//! Centralizes every compiler flag spelling used when assembling command
//! lines, so argument-building code reads as plain option names. Spellings
//! track current Nuitka releases (`--windows-console-mode=disable`,
//! `--lto=yes`), not the older forms.

/// Interpreter used when no virtual environment is selected.
pub const SYSTEM_PYTHON: &str = "python";

/// Auto-confirm compiler downloads: `--assume-yes-for-downloads`
pub const ASSUME_YES_FOR_DOWNLOADS: &str = "--assume-yes-for-downloads";

/// Output directory: `--output-dir=<dir>`
pub const OUTPUT_DIR: &str = "--output-dir";

/// Standalone distribution: `--standalone`
pub const STANDALONE: &str = "--standalone";

/// Single-file distribution: `--onefile`
pub const ONEFILE: &str = "--onefile";

/// Remove the build directory afterwards: `--remove-output`
pub const REMOVE_OUTPUT: &str = "--remove-output";

/// Suppress the console window: `--windows-console-mode=disable`
pub const WINDOWS_CONSOLE_DISABLE: &str = "--windows-console-mode=disable";

/// Descend into imported modules: `--follow-imports`
pub const FOLLOW_IMPORTS: &str = "--follow-imports";

/// Tk support plugin: `--enable-plugin=tk-inter`
pub const PLUGIN_TK_INTER: &str = "--enable-plugin=tk-inter";

/// PyQt6 support plugin: `--enable-plugin=pyqt6`
pub const PLUGIN_PYQT6: &str = "--enable-plugin=pyqt6";

/// Link time optimization: `--lto=yes`
pub const LTO_YES: &str = "--lto=yes";

/// Parallel C compile jobs: `--jobs=<n>`
pub const JOBS: &str = "--jobs";

/// Windows executable icon: `--windows-icon-from-ico=<path>`
pub const WINDOWS_ICON_FROM_ICO: &str = "--windows-icon-from-ico";

/// Embed the icon as a readable asset: `--include-data-files=<src>=<target>`
pub const INCLUDE_DATA_FILES: &str = "--include-data-files";

/// Embed one resource file: `--include-data-file=<src>=<target>`
pub const INCLUDE_DATA_FILE: &str = "--include-data-file";

// Compilation options

pub const CLANG: &str = "--clang";
pub const MINGW64: &str = "--mingw64";
pub const DISABLE_CONSOLE_CTRL_HANDLER: &str = "--disable-console-ctrl-handler";
pub const FULL_COMPAT: &str = "--full-compat";
pub const STATIC_LIBPYTHON_YES: &str = "--static-libpython=yes";

// Module options

pub const FOLLOW_STDLIB: &str = "--follow-stdlib";
pub const PREFER_SOURCE_CODE: &str = "--prefer-source-code";
pub const INCLUDE_PACKAGE_DATA: &str = "--include-package-data";
pub const PYTHON_FLAG_NOSITE: &str = "--python-flag=nosite";
pub const REMOVE_EMBEDDED: &str = "--remove-embedded";

// Performance options

pub const DISABLE_CCACHE: &str = "--disable-ccache";
/// High-memory mode maps to unbounded job count: `--jobs=maximum`
pub const JOBS_MAXIMUM: &str = "--jobs=maximum";
pub const LINUX_ONEFILE_ICON: &str = "--linux-onefile-icon";
pub const MACOS_CREATE_APP_BUNDLE: &str = "--macos-create-app-bundle";

// Debug options

pub const DEBUG: &str = "--debug";
pub const UNSTRIPED: &str = "--unstriped";
pub const TRACE_EXECUTION: &str = "--trace-execution";
pub const DISABLE_DLL_DEPENDENCY_CACHE: &str = "--disable-dll-dependency-cache";
pub const EXPERIMENTAL: &str = "--experimental";
pub const SHOW_MEMORY: &str = "--show-memory";
pub const SHOW_PROGRESS: &str = "--show-progress";
pub const VERBOSE: &str = "--verbose";

/// Do not descend into a package: `--nofollow-import-to=<module>`
pub const NOFOLLOW_IMPORT_TO: &str = "--nofollow-import-to";

/// Force-include a package: `--include-package=<module>`
pub const INCLUDE_PACKAGE: &str = "--include-package";

/// Clear the compiler cache: `--clean-cache=all`
pub const CLEAN_CACHE_ALL: &str = "--clean-cache=all";

/// Packaging machinery that must never be followed into the build, so the
/// compiler's own runtime does not end up inside the output.
pub const PACKAGING_EXCLUDES: &[&str] = &[
    "nuitka",
    "ordered_set",
    "wheel",
    "pip",
    "setuptools",
    "distutils",
    "pkg_resources",
    "zstandard",
];

/// Tk test modules excluded whenever the tk-inter plugin is enabled.
pub const TKINTER_TEST_EXCLUDES: &[&str] = &[
    "tkinter.test",
    "tkinter.test.support",
    "tkinter.test.widget_tests",
];
