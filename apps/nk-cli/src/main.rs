use clap::{Parser, Subcommand};
use nk_factory::{compiler, installer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "Nuitka Forge")]
#[command(version = "1.0")]
#[command(about = "Front-end for compiling Python scripts with Nuitka")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct CompileFlags {
    /// Python script to compile
    script: PathBuf,

    #[arg(long)]
    standalone: bool,

    #[arg(long)]
    onefile: bool,

    #[arg(long)]
    remove_output: bool,

    #[arg(long)]
    no_console: bool,

    #[arg(long)]
    follow_imports: bool,

    #[arg(long)]
    lto: bool,

    #[arg(long)]
    tkinter: bool,

    #[arg(long)]
    pyqt6: bool,

    /// Parallel C compile jobs (1-16)
    #[arg(short, long, default_value_t = 1)]
    jobs: u8,

    /// Python optimization level (0-3)
    #[arg(long, default_value_t = 2)]
    opt: u8,

    /// Virtual environment root to compile with
    #[arg(long)]
    venv: Option<PathBuf>,

    /// Icon file embedded as both the platform icon and a readable asset
    #[arg(long)]
    icon: Option<PathBuf>,

    /// Extra files embedded next to the executable (repeatable)
    #[arg(long = "resource")]
    resources: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    // 1. Compile
    Compile {
        #[command(flatten)]
        flags: CompileFlags,

        /// Run in a detached terminal window instead of streaming here
        #[arg(long, default_value_t = false)]
        detach: bool,

        /// Answer yes to all prompts
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },

    // 2. Preview
    /// Print the assembled command without running it
    Preview {
        #[command(flatten)]
        flags: CompileFlags,
    },

    // 3. Check
    /// Report the interpreter version and Nuitka presence
    Check {
        #[arg(long)]
        venv: Option<PathBuf>,
    },

    // 4. Install
    Install {
        #[arg(long)]
        venv: Option<PathBuf>,

        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },

    // 5. Uninstall
    Uninstall {
        #[arg(long)]
        venv: Option<PathBuf>,

        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },
}

impl CompileFlags {
    fn into_args(self, detach: bool, assume_yes: bool) -> compiler::CompileArgs {
        compiler::CompileArgs {
            script: self.script,
            standalone: self.standalone,
            onefile: self.onefile,
            remove_output: self.remove_output,
            no_console: self.no_console,
            follow_imports: self.follow_imports,
            lto: self.lto,
            tkinter: self.tkinter,
            pyqt6: self.pyqt6,
            jobs: self.jobs,
            opt_level: self.opt,
            venv: self.venv,
            icon: self.icon,
            resources: self.resources,
            detach,
            assume_yes,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        // [1] COMPILE
        Commands::Compile { flags, detach, yes } => {
            if let Err(e) = compiler::run_cli(flags.into_args(detach, yes)) {
                eprintln!("❌ Compile Error: {}", e);
            }
        }

        // [2] PREVIEW
        Commands::Preview { flags } => {
            if let Err(e) = compiler::run_preview_cli(flags.into_args(false, true)) {
                eprintln!("❌ Preview Error: {}", e);
            }
        }

        // [3] CHECK
        Commands::Check { venv } => {
            let args = installer::InstallArgs {
                venv,
                assume_yes: true,
            };
            if let Err(e) = installer::run_check_cli(args) {
                eprintln!("❌ Check Error: {}", e);
            }
        }

        // [4] INSTALL
        Commands::Install { venv, yes } => {
            let args = installer::InstallArgs {
                venv,
                assume_yes: yes,
            };
            if let Err(e) = installer::run_install_cli(args) {
                eprintln!("❌ Install Error: {}", e);
            }
        }

        // [5] UNINSTALL
        Commands::Uninstall { venv, yes } => {
            let args = installer::InstallArgs {
                venv,
                assume_yes: yes,
            };
            if let Err(e) = installer::run_uninstall_cli(args) {
                eprintln!("❌ Uninstall Error: {}", e);
            }
        }
    }
}
