use nk_core::{flags, BuildOptions, CommandLine};
use std::path::PathBuf;

fn base_options() -> BuildOptions {
    let mut options = BuildOptions::default();
    options.script = PathBuf::from("/tmp/app.py");
    options
}

#[test]
fn script_path_is_last_token() {
    let command = CommandLine::assemble(&base_options());
    assert_eq!(command.tokens().last().unwrap(), "/tmp/app.py");
}

#[test]
fn onefile_pairs_with_standalone() {
    let mut options = base_options();
    options.standalone = false;
    options.onefile = true;
    let tokens = CommandLine::assemble(&options);
    let tokens = tokens.tokens();
    let standalone = tokens.iter().position(|t| t == flags::STANDALONE);
    let onefile = tokens.iter().position(|t| t == flags::ONEFILE);
    assert!(standalone.is_some());
    assert!(onefile.is_some());
    assert!(standalone < onefile);
}

#[test]
fn standalone_alone_does_not_imply_onefile() {
    let mut options = base_options();
    options.standalone = true;
    let command = CommandLine::assemble(&options);
    assert!(command.tokens().contains(&flags::STANDALONE.to_string()));
    assert!(!command.tokens().contains(&flags::ONEFILE.to_string()));
}

#[test]
fn assembly_is_idempotent() {
    let mut options = base_options();
    options.onefile = true;
    options.lto = true;
    options.jobs = 8;
    options.icon = Some(PathBuf::from("/assets/app.ico"));
    options.add_resource(PathBuf::from("/assets/readme.txt"));
    let before = options.clone();

    let first = CommandLine::assemble(&options);
    let second = CommandLine::assemble(&options);
    assert_eq!(first, second);
    assert_eq!(options, before);
}

#[test]
fn bare_interpreter_when_no_venv_selected() {
    let command = CommandLine::assemble(&base_options());
    assert_eq!(command.tokens()[0], "python");
}

#[cfg(unix)]
#[test]
fn venv_interpreter_when_root_selected() {
    let mut options = base_options();
    options.venv_root = Some(PathBuf::from("/envs/demo"));
    let command = CommandLine::assemble(&options);
    assert_eq!(command.tokens()[0], "/envs/demo/bin/python");
}

#[test]
fn optimization_level_folds_into_interpreter_invocation() {
    let mut options = base_options();

    options.opt_level = 0;
    let tokens = CommandLine::assemble(&options);
    assert_eq!(&tokens.tokens()[1..3], ["-m", "nuitka"]);

    options.opt_level = 1;
    let tokens = CommandLine::assemble(&options);
    assert_eq!(tokens.tokens()[1], "-O");

    options.opt_level = 2;
    let tokens = CommandLine::assemble(&options);
    assert_eq!(tokens.tokens()[1], "-OO");

    options.opt_level = 3;
    let tokens = CommandLine::assemble(&options);
    assert_eq!(tokens.tokens()[1], "-OO");
}

#[test]
fn icon_emits_exactly_one_flag_pair() {
    let mut options = base_options();
    options.icon = Some(PathBuf::from("/assets/app.ico"));
    let command = CommandLine::assemble(&options);

    let icon_flags: Vec<_> = command
        .tokens()
        .iter()
        .filter(|t| t.starts_with(flags::WINDOWS_ICON_FROM_ICO))
        .collect();
    assert_eq!(icon_flags, vec!["--windows-icon-from-ico=/assets/app.ico"]);

    let data_flags: Vec<_> = command
        .tokens()
        .iter()
        .filter(|t| t.starts_with(flags::INCLUDE_DATA_FILES))
        .collect();
    assert_eq!(
        data_flags,
        vec!["--include-data-files=/assets/app.ico=app.ico"]
    );
}

#[test]
fn designated_icon_is_not_repeated_as_resource() {
    let mut options = base_options();
    options.icon = Some(PathBuf::from("/assets/app.ico"));
    options.resources.push(PathBuf::from("/assets/app.ico"));
    options.resources.push(PathBuf::from("/assets/help.txt"));
    let command = CommandLine::assemble(&options);

    let resource_flags: Vec<_> = command
        .tokens()
        .iter()
        .filter(|t| t.starts_with("--include-data-file="))
        .collect();
    assert_eq!(
        resource_flags,
        vec!["--include-data-file=/assets/help.txt=help.txt"]
    );
}

#[test]
fn basename_collisions_pass_through_unmerged() {
    let mut options = base_options();
    options.add_resource(PathBuf::from("/one/data.txt"));
    options.add_resource(PathBuf::from("/two/data.txt"));
    let command = CommandLine::assemble(&options);

    let colliding: Vec<_> = command
        .tokens()
        .iter()
        .filter(|t| t.ends_with("=data.txt"))
        .collect();
    assert_eq!(colliding.len(), 2);
}

#[test]
fn packaging_excludes_and_cleanup_always_present() {
    let command = CommandLine::assemble(&base_options());
    for module_name in flags::PACKAGING_EXCLUDES {
        let expected = format!("--nofollow-import-to={}", module_name);
        assert!(
            command.tokens().contains(&expected),
            "missing {}",
            expected
        );
    }
    assert!(command.tokens().contains(&flags::REMOVE_OUTPUT.to_string()));
    assert!(command.tokens().contains(&flags::CLEAN_CACHE_ALL.to_string()));
}

#[test]
fn console_suppression_uses_current_spelling() {
    let mut options = base_options();
    options.no_console = true;
    let command = CommandLine::assemble(&options);
    assert!(command
        .tokens()
        .contains(&"--windows-console-mode=disable".to_string()));
}

#[test]
fn tkinter_plugin_pulls_in_package_includes() {
    let mut options = base_options();
    options.tkinter_plugin = true;
    let command = CommandLine::assemble(&options);
    assert!(command.tokens().contains(&flags::PLUGIN_TK_INTER.to_string()));
    assert!(command
        .tokens()
        .contains(&"--include-package=tkinter".to_string()));
    assert!(command
        .tokens()
        .contains(&"--nofollow-import-to=tkinter.test".to_string()));
}

#[test]
fn onefile_scenario_end_to_end() {
    let mut options = BuildOptions::default();
    options.script = PathBuf::from("/tmp/app.py");
    options.standalone = false;
    options.onefile = true;
    options.jobs = 4;
    let command = CommandLine::assemble(&options);
    let tokens = command.tokens();

    assert!(tokens.contains(&flags::STANDALONE.to_string()));
    assert!(tokens.contains(&flags::ONEFILE.to_string()));
    assert!(tokens.contains(&"--jobs=4".to_string()));
    assert!(tokens.contains(&"--nofollow-import-to=nuitka".to_string()));
    assert!(tokens.contains(&flags::CLEAN_CACHE_ALL.to_string()));
    assert_eq!(tokens.last().unwrap(), "/tmp/app.py");
}

#[test]
fn output_dir_follows_script_folder() {
    let command = CommandLine::assemble(&base_options());
    assert!(command.tokens().contains(&"--output-dir=/tmp".to_string()));
}

#[test]
fn jobs_token_always_emitted() {
    let command = CommandLine::assemble(&base_options());
    assert!(command.tokens().contains(&"--jobs=1".to_string()));
}
