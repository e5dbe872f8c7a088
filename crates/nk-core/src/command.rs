use crate::flags;
use crate::options::BuildOptions;
use std::path::Path;

/// Ordered token sequence for one compiler invocation.
///
/// Assembly is pure and deterministic: the same snapshot always yields the
/// same tokens, in the same order, with the script path last. Building
/// never fails; a bad snapshot simply produces a command that fails later
/// at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn assemble(options: &BuildOptions) -> Self {
        let mut tokens = Vec::new();

        // Interpreter invocation, with the Python-level optimization folded
        // into it rather than passed to the compiler.
        tokens.push(options.interpreter().to_string_lossy().into_owned());
        match options.opt_level {
            0 => {}
            1 => tokens.push("-O".to_string()),
            _ => tokens.push("-OO".to_string()),
        }
        tokens.push("-m".to_string());
        tokens.push("nuitka".to_string());

        tokens.push(flags::ASSUME_YES_FOR_DOWNLOADS.to_string());

        if let Some(dir) = options.script_dir() {
            tokens.push(format!("{}={}", flags::OUTPUT_DIR, dir.display()));
        }

        // Basic options, in registration order. Onefile requires standalone.
        if options.onefile {
            tokens.push(flags::STANDALONE.to_string());
            tokens.push(flags::ONEFILE.to_string());
        } else if options.standalone {
            tokens.push(flags::STANDALONE.to_string());
        }
        if options.remove_output {
            tokens.push(flags::REMOVE_OUTPUT.to_string());
        }
        if options.no_console {
            tokens.push(flags::WINDOWS_CONSOLE_DISABLE.to_string());
        }
        if options.follow_imports {
            tokens.push(flags::FOLLOW_IMPORTS.to_string());
        }
        if options.tkinter_plugin {
            tokens.push(flags::PLUGIN_TK_INTER.to_string());
        }
        if options.pyqt6_plugin {
            tokens.push(flags::PLUGIN_PYQT6.to_string());
        }
        if options.lto {
            tokens.push(flags::LTO_YES.to_string());
        }
        tokens.push(format!("{}={}", flags::JOBS, options.jobs));

        // The icon is both the platform icon and a runtime-readable asset.
        if let Some(icon) = &options.icon {
            tokens.push(format!(
                "{}={}",
                flags::WINDOWS_ICON_FROM_ICO,
                icon.display()
            ));
            tokens.push(format!(
                "{}={}={}",
                flags::INCLUDE_DATA_FILES,
                icon.display(),
                base_name(icon)
            ));
        }

        // Resources embed under their base filename. Collisions on the
        // target name are emitted as-is, not deduplicated.
        for resource in &options.resources {
            if options.icon.as_deref() == Some(resource.as_path()) {
                continue;
            }
            tokens.push(format!(
                "{}={}={}",
                flags::INCLUDE_DATA_FILE,
                resource.display(),
                base_name(resource)
            ));
        }

        // Advanced groups, fixed registration order.
        let compilation = &options.compilation;
        if compilation.clang {
            tokens.push(flags::CLANG.to_string());
        }
        if compilation.mingw64 {
            tokens.push(flags::MINGW64.to_string());
        }
        if compilation.disable_console_ctrl_handler {
            tokens.push(flags::DISABLE_CONSOLE_CTRL_HANDLER.to_string());
        }
        if compilation.full_compat {
            tokens.push(flags::FULL_COMPAT.to_string());
        }
        if compilation.static_libpython {
            tokens.push(flags::STATIC_LIBPYTHON_YES.to_string());
        }

        let module = &options.module;
        if module.follow_stdlib {
            tokens.push(flags::FOLLOW_STDLIB.to_string());
        }
        if module.prefer_source {
            tokens.push(flags::PREFER_SOURCE_CODE.to_string());
        }
        if module.include_package_data {
            tokens.push(flags::INCLUDE_PACKAGE_DATA.to_string());
        }
        if module.python_flag_nosite {
            tokens.push(flags::PYTHON_FLAG_NOSITE.to_string());
        }
        if module.remove_embedded {
            tokens.push(flags::REMOVE_EMBEDDED.to_string());
        }

        let perf = &options.perf;
        if perf.disable_ccache {
            tokens.push(flags::DISABLE_CCACHE.to_string());
        }
        if perf.high_memory {
            tokens.push(flags::JOBS_MAXIMUM.to_string());
        }
        if perf.linux_onefile_icon {
            tokens.push(flags::LINUX_ONEFILE_ICON.to_string());
        }
        if perf.macos_create_app_bundle {
            tokens.push(flags::MACOS_CREATE_APP_BUNDLE.to_string());
        }

        let debug = &options.debug;
        if debug.debug {
            tokens.push(flags::DEBUG.to_string());
        }
        if debug.unstriped {
            tokens.push(flags::UNSTRIPED.to_string());
        }
        if debug.trace_execution {
            tokens.push(flags::TRACE_EXECUTION.to_string());
        }
        if debug.disable_dll_dependency_cache {
            tokens.push(flags::DISABLE_DLL_DEPENDENCY_CACHE.to_string());
        }
        if debug.experimental {
            tokens.push(flags::EXPERIMENTAL.to_string());
        }
        if debug.show_memory {
            tokens.push(flags::SHOW_MEMORY.to_string());
        }
        if debug.show_progress {
            tokens.push(flags::SHOW_PROGRESS.to_string());
        }
        if debug.verbose {
            tokens.push(flags::VERBOSE.to_string());
        }

        // Keep the compiler's own packaging machinery out of the build.
        for module_name in flags::PACKAGING_EXCLUDES {
            tokens.push(format!("{}={}", flags::NOFOLLOW_IMPORT_TO, module_name));
        }

        // Always-on cleanup, independent of user selection.
        tokens.push(flags::REMOVE_OUTPUT.to_string());
        tokens.push(flags::CLEAN_CACHE_ALL.to_string());

        if options.tkinter_plugin {
            tokens.push(format!("{}=tkinter", flags::INCLUDE_PACKAGE));
            tokens.push(format!("{}=_tkinter", flags::INCLUDE_PACKAGE));
            for module_name in flags::TKINTER_TEST_EXCLUDES {
                tokens.push(format!("{}={}", flags::NOFOLLOW_IMPORT_TO, module_name));
            }
        }

        // Script path last, always.
        tokens.push(options.script.to_string_lossy().into_owned());

        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// One shell-ready string, double-quoting tokens that need it.
    pub fn shell_string(&self) -> String {
        self.tokens
            .iter()
            .map(|token| quote(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn quote(token: &str) -> String {
    if token.is_empty() || token.contains(char::is_whitespace) {
        format!("\"{}\"", token)
    } else {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BuildOptions;
    use std::path::PathBuf;

    #[test]
    fn shell_string_quotes_whitespace() {
        let mut options = BuildOptions::default();
        options.script = PathBuf::from("/home/user/my project/app.py");
        let command = CommandLine::assemble(&options).shell_string();
        assert!(command.ends_with("\"/home/user/my project/app.py\""));
    }

    #[test]
    fn plain_tokens_are_not_quoted() {
        assert_eq!(quote("--standalone"), "--standalone");
        assert_eq!(quote(""), "\"\"");
    }
}
